use core::arch::wasm32::{
    i8x16, i8x16_swizzle, u16x8_add, u16x8_add_sat, u16x8_shr, u16x8_splat, u32x4_splat,
    v128_and, v128_or,
};

use archmage::prelude::*;
use safe_unaligned_simd::wasm32::{v128_load, v128_store};

use super::{Decimate, PixelShuffle, gray8_rest, gray16_rest, shuffle_rest};

// ===========================================================================
// WASM SIMD128: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn shuffle4_row_wasm128(
    _token: Wasm128Token,
    src: &[u8],
    dst: &mut [u8],
    sh: &PixelShuffle,
) {
    let mask = v128_load(&sh.lane);
    let fill = v128_load(&sh.fill);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        v128_store(d, v128_or(i8x16_swizzle(v128_load(s), mask), fill));
        i += 16;
    }
    shuffle_rest(&src[i..], &mut dst[i..], sh);
}

#[rite]
pub(super) fn shuffle3_row_wasm128(
    _token: Wasm128Token,
    src: &[u8],
    dst: &mut [u8],
    sh: &PixelShuffle,
) {
    let mask = v128_load(&sh.lane);
    let fill = v128_load(&sh.fill);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 16 <= slen && id + 16 <= dlen {
        let s: &[u8; 16] = src[is..is + 16].try_into().unwrap();
        let d: &mut [u8; 16] = (&mut dst[id..id + 16]).try_into().unwrap();
        v128_store(d, v128_or(i8x16_swizzle(v128_load(s), mask), fill));
        is += 12;
        id += 16;
    }
    shuffle_rest(&src[is..], &mut dst[id..], sh);
}

#[rite]
pub(super) fn gray8_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8]) {
    let m0 = i8x16(0, 0, 0, -128, 1, 1, 1, -128, 2, 2, 2, -128, 3, 3, 3, -128);
    let m1 = i8x16(4, 4, 4, -128, 5, 5, 5, -128, 6, 6, 6, -128, 7, 7, 7, -128);
    let m2 = i8x16(8, 8, 8, -128, 9, 9, 9, -128, 10, 10, 10, -128, 11, 11, 11, -128);
    let m3 = i8x16(12, 12, 12, -128, 13, 13, 13, -128, 14, 14, 14, -128, 15, 15, 15, -128);
    let alpha = u32x4_splat(0xFF000000);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 16 <= slen && id + 64 <= dlen {
        let s: &[u8; 16] = src[is..is + 16].try_into().unwrap();
        let grays = v128_load(s);
        for (j, mask) in [m0, m1, m2, m3].into_iter().enumerate() {
            let d: &mut [u8; 16] = (&mut dst[id + j * 16..id + (j + 1) * 16])
                .try_into()
                .unwrap();
            v128_store(d, v128_or(i8x16_swizzle(grays, mask), alpha));
        }
        is += 16;
        id += 64;
    }
    gray8_rest(&src[is..], &mut dst[id..]);
}

#[rite]
pub(super) fn gray16_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8], dec: Decimate) {
    let lo = i8x16(0, 0, 0, -128, 2, 2, 2, -128, 4, 4, 4, -128, 6, 6, 6, -128);
    let hi = i8x16(8, 8, 8, -128, 10, 10, 10, -128, 12, 12, 12, -128, 14, 14, 14, -128);
    let alpha = u32x4_splat(0xFF000000);
    let base = u16x8_splat(dec.base);
    let parity = u16x8_splat(dec.parity);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 16 <= slen && id + 32 <= dlen {
        let s: &[u8; 16] = src[is..is + 16].try_into().unwrap();
        let v = v128_load(s);
        let odd = v128_and(u16x8_shr(v, 8), parity);
        let g = u16x8_shr(u16x8_add_sat(v, u16x8_add(base, odd)), 8);
        let d0: &mut [u8; 16] = (&mut dst[id..id + 16]).try_into().unwrap();
        v128_store(d0, v128_or(i8x16_swizzle(g, lo), alpha));
        let d1: &mut [u8; 16] = (&mut dst[id + 16..id + 32]).try_into().unwrap();
        v128_store(d1, v128_or(i8x16_swizzle(g, hi), alpha));
        is += 16;
        id += 32;
    }
    gray16_rest(&src[is..], &mut dst[id..], dec);
}

// ===========================================================================
// WASM arcane wrappers
// ===========================================================================

#[arcane]
pub(super) fn shuffle4_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8], sh: PixelShuffle) {
    shuffle4_row_wasm128(t, s, d, &sh);
}
#[arcane]
pub(super) fn shuffle3_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8], sh: PixelShuffle) {
    shuffle3_row_wasm128(t, s, d, &sh);
}
#[arcane]
pub(super) fn gray8_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8]) {
    gray8_row_wasm128(t, s, d);
}
#[arcane]
pub(super) fn gray16_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8], dec: Decimate) {
    gray16_row_wasm128(t, s, d, dec);
}
