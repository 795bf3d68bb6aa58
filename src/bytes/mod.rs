// ---------------------------------------------------------------------------
// Row-level RGBA8 conversion kernels with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers are the incant! dispatch targets. Every kernel writes
// whole 4-byte RGBA pixels and touches nothing past the last source pixel.
// ---------------------------------------------------------------------------

//! Byte-slice kernels behind [`convert`](crate::convert).
//!
//! These operate on contiguous runs of pixels with no notion of width or
//! height. Sources are tightly packed at their stride; destinations are
//! RGBA8. Use them directly when you already know the layout and want to
//! skip the format lookup.

use archmage::incant;

use crate::{ChannelIndexMap, SizeError, Y16Rounding};

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;

#[cfg(test)]
mod tests;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_copy(
    src_len: usize,
    src_bpp: usize,
    dst_len: usize,
    dst_bpp: usize,
) -> Result<(), SizeError> {
    if src_len == 0 || !src_len.is_multiple_of(src_bpp) {
        return Err(SizeError::NotPixelAligned);
    }
    if dst_len < (src_len / src_bpp) * dst_bpp {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
fn check_map(map: ChannelIndexMap, src_bpp: usize) -> Result<(), SizeError> {
    let fits = match map {
        ChannelIndexMap::Three { .. } => src_bpp == 3 || src_bpp == 4,
        ChannelIndexMap::Four { .. } => src_bpp == 4,
    };
    if !fits || map.max_offset() as usize >= src_bpp {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Shuffle tables
// ===========================================================================

/// Byte shuffle for one packed layout, four pixels per 16-byte lane.
///
/// `lane[4p + c]` is the source byte (relative to the lane) that lands in
/// channel `c` of pixel `p`; `0x80` zeroes the byte. `fill` is OR-ed in
/// afterwards to set synthesized alpha to 0xFF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelShuffle {
    pub(super) lane: [u8; 16],
    pub(super) fill: [u8; 16],
    pub(super) rgb: [usize; 3],
    pub(super) alpha: Option<usize>,
    pub(super) bpp: usize,
}

impl PixelShuffle {
    pub(crate) fn new(map: ChannelIndexMap, bpp: usize) -> Self {
        let [r, g, b] = map.rgb();
        let alpha = map.alpha();
        let mut lane = [0x80u8; 16];
        let mut fill = [0u8; 16];
        for px in 0..4 {
            let s = (px * bpp) as u8;
            let d = px * 4;
            lane[d] = s + r;
            lane[d + 1] = s + g;
            lane[d + 2] = s + b;
            match alpha {
                Some(a) => lane[d + 3] = s + a,
                None => fill[d + 3] = 0xFF,
            }
        }
        Self {
            lane,
            fill,
            rgb: [r as usize, g as usize, b as usize],
            alpha: alpha.map(usize::from),
            bpp,
        }
    }

    /// The lane table repeated for both halves of a 256-bit register.
    #[cfg_attr(not(target_arch = "x86_64"), allow(dead_code))]
    pub(super) fn wide(table: [u8; 16]) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[..16].copy_from_slice(&table);
        out[16..].copy_from_slice(&table);
        out
    }
}

/// Bias applied to each 16-bit sample before `>> 8`; see [`Y16Rounding`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Decimate {
    pub(super) base: u16,
    pub(super) parity: u16,
}

impl Decimate {
    pub(crate) const fn new(rounding: Y16Rounding) -> Self {
        let (base, parity) = rounding.bias();
        Self { base, parity }
    }

    #[inline(always)]
    pub(super) fn apply(self, v: u16) -> u8 {
        (v.saturating_add(self.base + ((v >> 8) & self.parity)) >> 8) as u8
    }
}

// ===========================================================================
// Shared remainder loops
// ===========================================================================

#[inline(always)]
fn shuffle_rest(src: &[u8], dst: &mut [u8], sh: &PixelShuffle) {
    let [r, g, b] = sh.rgb;
    let pixels = src.chunks_exact(sh.bpp).zip(dst.chunks_exact_mut(4));
    match sh.alpha {
        Some(a) => {
            for (s, d) in pixels {
                d[0] = s[r];
                d[1] = s[g];
                d[2] = s[b];
                d[3] = s[a];
            }
        }
        None => {
            for (s, d) in pixels {
                d[0] = s[r];
                d[1] = s[g];
                d[2] = s[b];
                d[3] = 0xFF;
            }
        }
    }
}

#[inline(always)]
fn gray8_rest(src: &[u8], dst: &mut [u8]) {
    for (&v, d) in src.iter().zip(dst.chunks_exact_mut(4)) {
        d[0] = v;
        d[1] = v;
        d[2] = v;
        d[3] = 0xFF;
    }
}

#[inline(always)]
fn gray16_rest(src: &[u8], dst: &mut [u8], dec: Decimate) {
    for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact_mut(4)) {
        let v = dec.apply(u16::from_le_bytes([s[0], s[1]]));
        d[0] = v;
        d[1] = v;
        d[2] = v;
        d[3] = 0xFF;
    }
}

// ===========================================================================
// Public API
// ===========================================================================

/// Packed 3- or 4-byte pixels → RGBA8 through a channel index map.
///
/// `src_bpp` is the source stride: 4 for every four-channel map, 3 or 4 for
/// three-channel maps. Formats without a real alpha sample get alpha=255.
///
/// ```
/// use camrgba::{bytes, ChannelIndexMap};
///
/// let argb = [40u8, 10, 20, 30];
/// let mut rgba = [0u8; 4];
/// bytes::packed_to_rgba(&argb, &mut rgba, ChannelIndexMap::ARGB, 4).unwrap();
/// assert_eq!(rgba, [10, 20, 30, 40]);
/// ```
pub fn packed_to_rgba(
    src: &[u8],
    dst: &mut [u8],
    map: ChannelIndexMap,
    src_bpp: usize,
) -> Result<(), SizeError> {
    check_map(map, src_bpp)?;
    check_copy(src.len(), src_bpp, dst.len(), 4)?;
    let sh = PixelShuffle::new(map, src_bpp);
    if src_bpp == 4 {
        incant!(shuffle4_impl(src, dst, sh), [v3, neon, wasm128, scalar]);
    } else {
        incant!(shuffle3_impl(src, dst, sh), [v3, neon, wasm128, scalar]);
    }
    Ok(())
}

/// 8-bit gray (1 byte/px) → RGBA8. R=G=B=gray, alpha=255.
pub fn gray8_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), 1, dst.len(), 4)?;
    incant!(gray8_impl(src, dst), [v3, neon, wasm128, scalar]);
    Ok(())
}

/// 16-bit little-endian gray (2 bytes/px) → RGBA8.
///
/// Each sample is divided by 256 under `rounding` and saturated at 255.
pub fn gray16_to_rgba(
    src: &[u8],
    dst: &mut [u8],
    rounding: Y16Rounding,
) -> Result<(), SizeError> {
    check_copy(src.len(), 2, dst.len(), 4)?;
    let dec = Decimate::new(rounding);
    incant!(gray16_impl(src, dst, dec), [v3, neon, wasm128, scalar]);
    Ok(())
}
