//! Format dispatch: pick the converter for a [`PixelFormat`] and run it.

use core::ops::Range;

use tracing::{trace, warn};

use crate::frame::image_len;
use crate::{
    ConvertError, ConvertOptions, Frame, MalformedFrame, PixelFormat, SourceLayout,
    convert_grayscale_with, convert_packed_with, lookup,
};

/// A format lookup resolved once and reusable for any number of frames.
///
/// ```
/// use camrgba::{Conversion, ConvertOptions, PixelFormat};
///
/// let conv = Conversion::new(PixelFormat::Y8, &ConvertOptions::default()).unwrap();
/// let mut rgba = [0u8; 8];
/// conv.run(&mut rgba, 2, 1, &[200, 7]).unwrap();
/// assert_eq!(rgba, [200, 200, 200, 255, 7, 7, 7, 255]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conversion {
    format: PixelFormat,
    layout: SourceLayout,
    options: ConvertOptions,
}

impl Conversion {
    /// Resolve `format`, failing with [`ConvertError::UnsupportedFormat`].
    pub fn new(format: PixelFormat, options: &ConvertOptions) -> Result<Self, ConvertError> {
        let layout = lookup(format).ok_or(ConvertError::UnsupportedFormat(format))?;
        Ok(Self {
            format,
            layout,
            options: *options,
        })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn layout(&self) -> SourceLayout {
        self.layout
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Source bytes per pixel.
    pub fn source_stride(&self) -> usize {
        self.layout.source_stride(&self.options)
    }

    /// Convert a whole `width x height` image into `dst`.
    pub fn run(
        &self,
        dst: &mut [u8],
        width: u32,
        height: u32,
        src: &[u8],
    ) -> Result<(), ConvertError> {
        match self.layout {
            SourceLayout::Packed(map) => {
                convert_packed_with(dst, width, height, src, map, &self.options)
            }
            SourceLayout::Gray(g) => {
                convert_grayscale_with(dst, width, height, src, g.bit_depth, &self.options)
            }
        }
    }

    /// Convert rows `rows` of a `width x height` image.
    ///
    /// `src` is the whole frame; `dst_rows` holds only the band, exactly
    /// `rows.len() * width * 4` bytes. The result is byte-identical to the
    /// same rows of a full [`run`](Self::run).
    pub fn run_rows(
        &self,
        dst_rows: &mut [u8],
        src: &[u8],
        width: u32,
        height: u32,
        rows: Range<u32>,
    ) -> Result<(), ConvertError> {
        let Range { start, end } = rows;
        if start > end || end > height {
            return Err(MalformedFrame::RowRange { start, end, height }.into());
        }
        let stride = self.source_stride();
        let needed = image_len(width, height, stride)?;
        if src.len() < needed {
            return Err(MalformedFrame::SourceTooShort {
                needed,
                actual: src.len(),
            }
            .into());
        }
        let row_bytes = image_len(width, 1, stride)?;
        let band = &src[start as usize * row_bytes..end as usize * row_bytes];
        self.run(dst_rows, width, end - start, band)
    }
}

fn report(format: PixelFormat, width: u32, height: u32, result: &Result<(), ConvertError>) {
    match result {
        Ok(()) => trace!(%format, width, height, "converted frame to RGBA8"),
        Err(e) => warn!(%format, width, height, "frame not converted: {}", e),
    }
}

/// Convert one frame into `dst` with default options.
///
/// `dst` must be exactly `width * height * 4` bytes; `src` must hold at
/// least `width * height` pixels of `format`. On any error `dst` is left
/// untouched and a warning is logged.
pub fn convert(
    dst: &mut [u8],
    width: u32,
    height: u32,
    src: &[u8],
    format: PixelFormat,
) -> Result<(), ConvertError> {
    convert_with(dst, width, height, src, format, &ConvertOptions::default())
}

/// [`convert`] with explicit options.
pub fn convert_with(
    dst: &mut [u8],
    width: u32,
    height: u32,
    src: &[u8],
    format: PixelFormat,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let result = Conversion::new(format, options).and_then(|c| c.run(dst, width, height, src));
    report(format, width, height, &result);
    result
}

/// Convert a [`Frame`] into `dst` with default options.
pub fn convert_frame(frame: &Frame<'_>, dst: &mut [u8]) -> Result<(), ConvertError> {
    convert_frame_with(frame, dst, &ConvertOptions::default())
}

/// [`convert_frame`] with explicit options.
pub fn convert_frame_with(
    frame: &Frame<'_>,
    dst: &mut [u8],
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    convert_with(dst, frame.width, frame.height, frame.raw, frame.pixel_format, options)
}

/// Convert only rows `rows` of a frame. See [`Conversion::run_rows`].
///
/// ```
/// use camrgba::{ConvertOptions, PixelFormat, convert_rows};
///
/// let y8 = [1u8, 2, 3, 4, 5, 6];
/// let mut band = [0u8; 8];
/// let opts = ConvertOptions::default();
/// convert_rows(&mut band, &y8, 2, 3, 1..2, PixelFormat::Y8, &opts).unwrap();
/// assert_eq!(band, [3, 3, 3, 255, 4, 4, 4, 255]);
/// ```
pub fn convert_rows(
    dst_rows: &mut [u8],
    src: &[u8],
    width: u32,
    height: u32,
    rows: Range<u32>,
    format: PixelFormat,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let result = Conversion::new(format, options)
        .and_then(|c| c.run_rows(dst_rows, src, width, height, rows.clone()));
    match &result {
        Ok(()) => trace!(%format, width, start = rows.start, end = rows.end, "converted rows"),
        Err(e) => warn!(
            %format,
            width,
            height,
            "rows {}..{} not converted: {}",
            rows.start,
            rows.end,
            e
        ),
    }
    result
}
