//! Row-band parallel conversion on the rayon pool.
//!
//! Bands are independent: each reads its own source rows and writes its own
//! slice of `dst`, so the output is identical to
//! [`convert_with`](crate::convert_with).

use rayon::prelude::*;
use tracing::{trace, warn};

use crate::frame::check_buffers;
use crate::{Conversion, ConvertError, ConvertOptions, Frame};

/// Convert `frame` into `dst` with bands of `rows_per_band` rows per task.
///
/// Buffers are validated once up front; on error nothing is written.
/// `rows_per_band` is clamped to `1..=height`.
///
/// ```
/// use camrgba::{ConvertOptions, Frame, PixelFormat, parallel};
///
/// let raw = vec![7u8; 64 * 48];
/// let frame = Frame::new(64, 48, PixelFormat::Y8, &raw);
/// let mut rgba = vec![0u8; 64 * 48 * 4];
/// parallel::par_convert(&mut rgba, &frame, &ConvertOptions::default(), 8).unwrap();
/// assert!(rgba.chunks_exact(4).all(|px| px == [7, 7, 7, 255]));
/// ```
pub fn par_convert(
    dst: &mut [u8],
    frame: &Frame<'_>,
    options: &ConvertOptions,
    rows_per_band: u32,
) -> Result<(), ConvertError> {
    let (width, height) = (frame.width, frame.height);
    let result = Conversion::new(frame.pixel_format, options).and_then(|conv| {
        check_buffers(width, height, conv.source_stride(), frame.raw.len(), dst.len())?;
        if dst.is_empty() {
            return Ok(());
        }
        let band_rows = rows_per_band.clamp(1, height);
        let band_bytes = band_rows as usize * width as usize * 4;
        dst.par_chunks_mut(band_bytes)
            .enumerate()
            .try_for_each(|(i, band)| {
                let start = i as u32 * band_rows;
                let end = start.saturating_add(band_rows).min(height);
                conv.run_rows(band, frame.raw, width, height, start..end)
            })
    });
    match &result {
        Ok(()) => trace!(
            format = %frame.pixel_format,
            width,
            height,
            rows_per_band,
            "converted frame in bands"
        ),
        Err(e) => warn!(
            format = %frame.pixel_format,
            width,
            height,
            "frame not converted: {}",
            e
        ),
    }
    result
}
