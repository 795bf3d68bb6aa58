//! Whole-frame conversion into [`imgref`] buffers.
//!
//! Destinations may be strided; rows are converted one at a time.
//!
//! ```rust
//! use camrgba::{Frame, PixelFormat, img};
//!
//! let raw = [10u8, 20, 30, 40];
//! let frame = Frame::new(2, 2, PixelFormat::Y8, &raw);
//! let rgba = img::convert_to_img(&frame).unwrap();
//! assert_eq!(rgba.width(), 2);
//! assert_eq!(rgba[(1usize, 1usize)].r, 40);
//! ```

use alloc::vec;

use imgref::{ImgRefMut, ImgVec};
use rgb::Rgba;
use tracing::warn;

use crate::{Conversion, ConvertError, ConvertOptions, Frame, MalformedFrame};

/// Allocate an RGBA8 image and convert `frame` into it.
///
/// A frame of width 0 yields [`MalformedFrame::ZeroWidth`]; height 0 gives an
/// empty image.
pub fn convert_to_img(frame: &Frame<'_>) -> Result<ImgVec<Rgba<u8>>, ConvertError> {
    convert_to_img_with(frame, &ConvertOptions::default())
}

/// [`convert_to_img`] with explicit options.
pub fn convert_to_img_with(
    frame: &Frame<'_>,
    options: &ConvertOptions,
) -> Result<ImgVec<Rgba<u8>>, ConvertError> {
    let pixels = frame.pixel_count()?;
    let mut buf = vec![Rgba::new(0u8, 0, 0, 0); pixels];
    crate::convert_frame_with(frame, bytemuck::cast_slice_mut(&mut buf), options)?;
    // imgref rejects a zero row stride.
    if frame.width == 0 {
        return Err(MalformedFrame::ZeroWidth {
            height: frame.height,
        }
        .into());
    }
    Ok(ImgVec::new(buf, frame.width as usize, frame.height as usize))
}

/// Convert `frame` into a caller-owned, possibly strided image.
///
/// `dst` must have the frame's width and height. Padding between rows is
/// left untouched, as is every pixel when an error is returned.
pub fn convert_into_img(
    frame: &Frame<'_>,
    mut dst: ImgRefMut<'_, Rgba<u8>>,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let result = Conversion::new(frame.pixel_format, options).and_then(|conv| {
        if dst.width() != frame.width as usize || dst.height() != frame.height as usize {
            return Err(MalformedFrame::DestinationSize {
                expected: frame.rgba_len()?,
                actual: dst.width() * dst.height() * 4,
            }
            .into());
        }
        let needed = frame.required_source_len(options)?;
        if frame.raw.len() < needed {
            return Err(MalformedFrame::SourceTooShort {
                needed,
                actual: frame.raw.len(),
            }
            .into());
        }
        for (y, row) in (0..frame.height).zip(dst.rows_mut()) {
            let row_bytes: &mut [u8] = bytemuck::cast_slice_mut(row);
            conv.run_rows(row_bytes, frame.raw, frame.width, frame.height, y..y + 1)?;
        }
        Ok(())
    });
    if let Err(e) = &result {
        warn!(format = %frame.pixel_format, "image not converted: {}", e);
    }
    result
}
