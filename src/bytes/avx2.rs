use core::arch::x86_64::{
    _mm256_add_epi16, _mm256_adds_epu16, _mm256_and_si256, _mm256_or_si256,
    _mm256_permute2x128_si256, _mm256_permutevar8x32_epi32, _mm256_set1_epi16,
    _mm256_set1_epi64x, _mm256_shuffle_epi8, _mm256_srli_epi16,
};

use archmage::prelude::*;
use safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

use super::{Decimate, PixelShuffle, gray8_rest, gray16_rest, shuffle_rest};

// ===========================================================================
// SIMD constants
// ===========================================================================

const ALPHA_FF_MASK_AVX: [i8; 32] = [
    0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0,
    0, 0, -1,
];

// Broadcast 8 grays; lane 0 expands gray 0..3, lane 1 expands gray 4..7.
const GRAY_EXPAND_MASK_AVX: [i8; 32] = [
    0, 0, 0, -128, 1, 1, 1, -128, 2, 2, 2, -128, 3, 3, 3, -128, 4, 4, 4, -128, 5, 5, 5, -128, 6, 6,
    6, -128, 7, 7, 7, -128,
];

// Low byte of u16 samples 0..3 (and 4..7) of each lane, replicated to R, G, B.
const GRAY16_EXPAND_LO_AVX: [i8; 32] = [
    0, 0, 0, -128, 2, 2, 2, -128, 4, 4, 4, -128, 6, 6, 6, -128, 0, 0, 0, -128, 2, 2, 2, -128, 4, 4,
    4, -128, 6, 6, 6, -128,
];

const GRAY16_EXPAND_HI_AVX: [i8; 32] = [
    8, 8, 8, -128, 10, 10, 10, -128, 12, 12, 12, -128, 14, 14, 14, -128, 8, 8, 8, -128, 10, 10, 10,
    -128, 12, 12, 12, -128, 14, 14, 14, -128,
];

// Spread 24 packed bytes so each lane starts on a 3bpp pixel: dwords 0..3 | 3..6.
const RGB_ALIGN_PERM_AVX: [i8; 32] = [
    0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 3, 0, 0, 0, 4, 0, 0, 0, 5, 0, 0, 0, 6, 0, 0, 0,
];

// ===========================================================================
// x86-64 AVX2: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn shuffle4_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], sh: &PixelShuffle) {
    let mask = _mm256_loadu_si256(&PixelShuffle::wide(sh.lane));
    let fill = _mm256_loadu_si256(&PixelShuffle::wide(sh.fill));
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let shuffled = _mm256_shuffle_epi8(_mm256_loadu_si256(s), mask);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, _mm256_or_si256(shuffled, fill));
        i += 32;
    }
    shuffle_rest(&src[i..], &mut dst[i..], sh);
}

#[rite]
pub(super) fn shuffle3_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], sh: &PixelShuffle) {
    let perm = _mm256_loadu_si256(&RGB_ALIGN_PERM_AVX);
    let mask = _mm256_loadu_si256(&PixelShuffle::wide(sh.lane));
    let fill = _mm256_loadu_si256(&PixelShuffle::wide(sh.fill));
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 32 <= slen && id + 32 <= dlen {
        let s: &[u8; 32] = src[is..is + 32].try_into().unwrap();
        let aligned = _mm256_permutevar8x32_epi32(_mm256_loadu_si256(s), perm);
        let shuffled = _mm256_shuffle_epi8(aligned, mask);
        let d: &mut [u8; 32] = (&mut dst[id..id + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, _mm256_or_si256(shuffled, fill));
        is += 24;
        id += 32;
    }
    shuffle_rest(&src[is..], &mut dst[id..], sh);
}

#[rite]
pub(super) fn gray8_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8]) {
    let expand = _mm256_loadu_si256(&GRAY_EXPAND_MASK_AVX);
    let alpha = _mm256_loadu_si256(&ALPHA_FF_MASK_AVX);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 8 <= slen && id + 32 <= dlen {
        let gray8 = u64::from_ne_bytes(src[is..is + 8].try_into().unwrap());
        let grays = _mm256_set1_epi64x(gray8 as i64);
        let rgba = _mm256_or_si256(_mm256_shuffle_epi8(grays, expand), alpha);
        let d: &mut [u8; 32] = (&mut dst[id..id + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, rgba);
        is += 8;
        id += 32;
    }
    gray8_rest(&src[is..], &mut dst[id..]);
}

// 16 samples per iteration: round in u16 lanes, then expand the low bytes.
#[rite]
pub(super) fn gray16_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], dec: Decimate) {
    let lo = _mm256_loadu_si256(&GRAY16_EXPAND_LO_AVX);
    let hi = _mm256_loadu_si256(&GRAY16_EXPAND_HI_AVX);
    let alpha = _mm256_loadu_si256(&ALPHA_FF_MASK_AVX);
    let base = _mm256_set1_epi16(dec.base as i16);
    let parity = _mm256_set1_epi16(dec.parity as i16);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 32 <= slen && id + 64 <= dlen {
        let s: &[u8; 32] = src[is..is + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(s);
        let odd = _mm256_and_si256(_mm256_srli_epi16::<8>(v), parity);
        let biased = _mm256_adds_epu16(v, _mm256_add_epi16(base, odd));
        let g = _mm256_srli_epi16::<8>(biased);
        // a: pixels 0..3 | 8..11, b: pixels 4..7 | 12..15
        let a = _mm256_or_si256(_mm256_shuffle_epi8(g, lo), alpha);
        let b = _mm256_or_si256(_mm256_shuffle_epi8(g, hi), alpha);
        let d0: &mut [u8; 32] = (&mut dst[id..id + 32]).try_into().unwrap();
        _mm256_storeu_si256(d0, _mm256_permute2x128_si256::<0x20>(a, b));
        let d1: &mut [u8; 32] = (&mut dst[id + 32..id + 64]).try_into().unwrap();
        _mm256_storeu_si256(d1, _mm256_permute2x128_si256::<0x31>(a, b));
        is += 32;
        id += 64;
    }
    gray16_rest(&src[is..], &mut dst[id..], dec);
}

// ===========================================================================
// x86-64 arcane wrappers
// ===========================================================================

#[arcane]
pub(super) fn shuffle4_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], sh: PixelShuffle) {
    shuffle4_row_v3(t, s, d, &sh);
}
#[arcane]
pub(super) fn shuffle3_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], sh: PixelShuffle) {
    shuffle3_row_v3(t, s, d, &sh);
}
#[arcane]
pub(super) fn gray8_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8]) {
    gray8_row_v3(t, s, d);
}
#[arcane]
pub(super) fn gray16_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], dec: Decimate) {
    gray16_row_v3(t, s, d, dec);
}
