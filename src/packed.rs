//! Packed 3/4-channel sources → RGBA8.

use crate::frame::check_buffers;
use crate::{ChannelIndexMap, ConvertError, ConvertOptions, bytes};

/// Convert a `width x height` packed image through `map` with default options.
///
/// See [`convert_packed_with`].
pub fn convert_packed(
    dst: &mut [u8],
    width: u32,
    height: u32,
    src: &[u8],
    map: ChannelIndexMap,
) -> Result<(), ConvertError> {
    convert_packed_with(dst, width, height, src, map, &ConvertOptions::default())
}

/// Convert a `width x height` packed image through `map`.
///
/// Pixel `i` becomes `[s[r], s[g], s[b], s[a]]`, with alpha 255 when the map
/// has none. `s` is read at 4 bytes per pixel, or at
/// [`ConvertOptions::three_channel_stride`] for three-channel maps.
///
/// `dst` must be exactly `width * height * 4` bytes. Nothing is written on
/// error.
///
/// ```
/// use camrgba::{ChannelIndexMap, ConvertOptions, ThreeChannelStride, convert_packed_with};
///
/// let bgr = [30u8, 20, 10, 3, 2, 1];
/// let mut rgba = [0u8; 8];
/// let opts = ConvertOptions::new().with_three_channel_stride(ThreeChannelStride::Packed);
/// convert_packed_with(&mut rgba, 2, 1, &bgr, ChannelIndexMap::BGR, &opts).unwrap();
/// assert_eq!(rgba, [10, 20, 30, 255, 1, 2, 3, 255]);
/// ```
pub fn convert_packed_with(
    dst: &mut [u8],
    width: u32,
    height: u32,
    src: &[u8],
    map: ChannelIndexMap,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let stride = map.source_stride(options);
    let needed = check_buffers(width, height, stride, src.len(), dst.len())?;
    if needed == 0 {
        return Ok(());
    }
    bytes::packed_to_rgba(&src[..needed], dst, map, stride)?;
    Ok(())
}
