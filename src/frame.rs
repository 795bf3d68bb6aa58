//! Borrowed frame record and the buffer-geometry checks shared by the converters.

use crate::{ConvertError, ConvertOptions, MalformedFrame, PixelFormat, lookup};

/// One decoded camera frame as delivered by the stream layer.
///
/// `raw` is borrowed; the frame never owns pixel memory.
///
/// ```
/// use camrgba::{Frame, PixelFormat};
///
/// let raw = [0u8; 2 * 3 * 2];
/// let frame = Frame::new(2, 3, PixelFormat::Y16, &raw);
/// assert_eq!(frame.pixel_count(), Ok(6));
/// assert_eq!(frame.rgba_len(), Ok(24));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Frame<'a> {
    pub width: u32,
    pub height: u32,
    pub pixel_format: PixelFormat,
    pub raw: &'a [u8],
}

impl<'a> Frame<'a> {
    pub const fn new(width: u32, height: u32, pixel_format: PixelFormat, raw: &'a [u8]) -> Self {
        Self {
            width,
            height,
            pixel_format,
            raw,
        }
    }

    /// `width * height`, or an error if that overflows `usize`.
    pub fn pixel_count(&self) -> Result<usize, MalformedFrame> {
        pixel_count(self.width, self.height)
    }

    /// Size in bytes of the RGBA8 destination for this frame.
    pub fn rgba_len(&self) -> Result<usize, MalformedFrame> {
        image_len(self.width, self.height, 4)
    }

    /// Bytes of `raw` the conversion will read under `options`.
    pub fn required_source_len(&self, options: &ConvertOptions) -> Result<usize, ConvertError> {
        let layout = lookup(self.pixel_format)
            .ok_or(ConvertError::UnsupportedFormat(self.pixel_format))?;
        Ok(image_len(self.width, self.height, layout.source_stride(options))?)
    }
}

pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, MalformedFrame> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(MalformedFrame::DimensionsOverflow { width, height })
}

pub(crate) fn image_len(width: u32, height: u32, bpp: usize) -> Result<usize, MalformedFrame> {
    pixel_count(width, height)?
        .checked_mul(bpp)
        .ok_or(MalformedFrame::DimensionsOverflow { width, height })
}

/// Validate both buffers for a `width x height` image and return the number
/// of source bytes to read.
///
/// The destination must be exactly `width * height * 4` bytes. The source may
/// be longer than needed; trailing bytes are ignored.
pub(crate) fn check_buffers(
    width: u32,
    height: u32,
    src_bpp: usize,
    src_len: usize,
    dst_len: usize,
) -> Result<usize, MalformedFrame> {
    let expected = image_len(width, height, 4)?;
    if dst_len != expected {
        return Err(MalformedFrame::DestinationSize {
            expected,
            actual: dst_len,
        });
    }
    let needed = image_len(width, height, src_bpp)?;
    if src_len < needed {
        return Err(MalformedFrame::SourceTooShort {
            needed,
            actual: src_len,
        });
    }
    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry() {
        assert_eq!(check_buffers(2, 2, 4, 16, 16), Ok(16));
        assert_eq!(check_buffers(2, 2, 3, 20, 16), Ok(12));
        assert_eq!(check_buffers(0, 7, 4, 0, 0), Ok(0));
        assert_eq!(
            check_buffers(2, 2, 4, 15, 16),
            Err(MalformedFrame::SourceTooShort {
                needed: 16,
                actual: 15
            })
        );
        assert_eq!(
            check_buffers(2, 2, 1, 4, 20),
            Err(MalformedFrame::DestinationSize {
                expected: 16,
                actual: 20
            })
        );
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn overflow() {
        assert_eq!(
            image_len(u32::MAX, u32::MAX, 4),
            Err(MalformedFrame::DimensionsOverflow {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn overflow() {
        let max = u32::MAX as usize;
        assert_eq!(pixel_count(u32::MAX, u32::MAX), Ok(max * max));
        assert_eq!(
            image_len(u32::MAX, u32::MAX, 4),
            Err(MalformedFrame::DimensionsOverflow {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn required_source_len() {
        let raw = [0u8; 0];
        let opts = ConvertOptions::default();
        let packed = opts.with_three_channel_stride(crate::ThreeChannelStride::Packed);
        let f = Frame::new(4, 2, PixelFormat::Bgr, &raw);
        assert_eq!(f.required_source_len(&opts), Ok(32));
        assert_eq!(f.required_source_len(&packed), Ok(24));
        let f = Frame::new(4, 2, PixelFormat::Nv12, &raw);
        assert_eq!(
            f.required_source_len(&opts),
            Err(ConvertError::UnsupportedFormat(PixelFormat::Nv12))
        );
    }
}
