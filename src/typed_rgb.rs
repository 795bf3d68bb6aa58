//! Conversions into [`rgb::Rgba<u8>`] pixel slices via bytemuck.
//!
//! The typed destination is reinterpreted as bytes and filled by the same
//! SIMD kernels as the byte API.
//!
//! ```rust
//! use rgb::Rgba;
//! use camrgba::{Frame, PixelFormat, typed_rgb};
//!
//! let raw = [30u8, 20, 10, 0, 3, 2, 1, 0];
//! let frame = Frame::new(2, 1, PixelFormat::Bgrx, &raw);
//! let mut pixels = vec![Rgba::new(0u8, 0, 0, 0); 2];
//! typed_rgb::convert_into(&mut pixels, &frame).unwrap();
//! assert_eq!(pixels[0], Rgba::new(10, 20, 30, 255));
//! ```

use rgb::{Bgr, Bgra, Gray, Rgba};

use crate::{ChannelIndexMap, ConvertError, ConvertOptions, Frame, SizeError};

/// Convert `frame` into `dst`, which must hold exactly `width * height` pixels.
pub fn convert_into(dst: &mut [Rgba<u8>], frame: &Frame<'_>) -> Result<(), ConvertError> {
    convert_into_with(dst, frame, &ConvertOptions::default())
}

/// [`convert_into`] with explicit options.
pub fn convert_into_with(
    dst: &mut [Rgba<u8>],
    frame: &Frame<'_>,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    crate::convert_frame_with(frame, bytemuck::cast_slice_mut(dst), options)
}

// ---------------------------------------------------------------------------
// Typed sources
// ---------------------------------------------------------------------------

/// Copy `&[Bgra<u8>]` into `&mut [Rgba<u8>]`, swapping B↔R.
pub fn bgra_to_rgba_buf(src: &[Bgra<u8>], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    crate::bytes::packed_to_rgba(
        bytemuck::cast_slice(src),
        bytemuck::cast_slice_mut(dst),
        ChannelIndexMap::BGRA,
        4,
    )
}

/// Copy `&[Bgr<u8>]` into `&mut [Rgba<u8>]`, alpha=255.
pub fn bgr_to_rgba_buf(src: &[Bgr<u8>], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    crate::bytes::packed_to_rgba(
        bytemuck::cast_slice(src),
        bytemuck::cast_slice_mut(dst),
        ChannelIndexMap::BGR,
        3,
    )
}

/// Expand `&[Gray<u8>]` into `&mut [Rgba<u8>]`, alpha=255.
pub fn gray_to_rgba_buf(src: &[Gray<u8>], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    crate::bytes::gray8_to_rgba(bytemuck::cast_slice(src), bytemuck::cast_slice_mut(dst))
}
