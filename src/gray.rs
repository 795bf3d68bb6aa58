//! Single-channel gray sources → RGBA8.

use crate::frame::check_buffers;
use crate::{BitDepth, ConvertError, ConvertOptions, bytes};

/// Convert a `width x height` gray image with default options.
pub fn convert_grayscale(
    dst: &mut [u8],
    width: u32,
    height: u32,
    src: &[u8],
    bit_depth: BitDepth,
) -> Result<(), ConvertError> {
    convert_grayscale_with(dst, width, height, src, bit_depth, &ConvertOptions::default())
}

/// Convert a `width x height` gray image.
///
/// Every pixel becomes `(v, v, v, 255)`. 16-bit samples are little-endian and
/// reduced to 8 bits by [`ConvertOptions::y16_rounding`], saturating at 255.
///
/// ```
/// use camrgba::{BitDepth, convert_grayscale};
///
/// let y16 = 65280u16.to_le_bytes();
/// let mut rgba = [0u8; 4];
/// convert_grayscale(&mut rgba, 1, 1, &y16, BitDepth::Sixteen).unwrap();
/// assert_eq!(rgba, [255, 255, 255, 255]);
/// ```
pub fn convert_grayscale_with(
    dst: &mut [u8],
    width: u32,
    height: u32,
    src: &[u8],
    bit_depth: BitDepth,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let needed = check_buffers(width, height, bit_depth.bytes(), src.len(), dst.len())?;
    if needed == 0 {
        return Ok(());
    }
    let src = &src[..needed];
    match bit_depth {
        BitDepth::Eight => bytes::gray8_to_rgba(src, dst)?,
        BitDepth::Sixteen => bytes::gray16_to_rgba(src, dst, options.y16_rounding)?,
    }
    Ok(())
}
