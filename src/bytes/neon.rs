use core::arch::aarch64::{
    vaddq_u16, vandq_u16, vdupq_n_u16, vorrq_u8, vqaddq_u16, vqtbl1q_u8, vreinterpretq_u16_u8,
    vreinterpretq_u8_u16, vshrq_n_u16,
};

use archmage::prelude::*;
use safe_unaligned_simd::aarch64::{vld1q_u8, vst1q_u8};

use super::{Decimate, PixelShuffle, gray8_rest, gray16_rest, shuffle_rest};

const ALPHA_FF: [u8; 16] = [0, 0, 0, 0xFF, 0, 0, 0, 0xFF, 0, 0, 0, 0xFF, 0, 0, 0, 0xFF];

const GRAY_EXPAND: [[u8; 16]; 4] = [
    [0, 0, 0, 0x80, 1, 1, 1, 0x80, 2, 2, 2, 0x80, 3, 3, 3, 0x80],
    [4, 4, 4, 0x80, 5, 5, 5, 0x80, 6, 6, 6, 0x80, 7, 7, 7, 0x80],
    [8, 8, 8, 0x80, 9, 9, 9, 0x80, 10, 10, 10, 0x80, 11, 11, 11, 0x80],
    [12, 12, 12, 0x80, 13, 13, 13, 0x80, 14, 14, 14, 0x80, 15, 15, 15, 0x80],
];

// Low bytes of u16 lanes 0..3 and 4..7.
const GRAY16_EXPAND: [[u8; 16]; 2] = [
    [0, 0, 0, 0x80, 2, 2, 2, 0x80, 4, 4, 4, 0x80, 6, 6, 6, 0x80],
    [8, 8, 8, 0x80, 10, 10, 10, 0x80, 12, 12, 12, 0x80, 14, 14, 14, 0x80],
];

// ===========================================================================
// ARM NEON: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn shuffle4_row_neon(_token: NeonToken, src: &[u8], dst: &mut [u8], sh: &PixelShuffle) {
    let mask = vld1q_u8(&sh.lane);
    let fill = vld1q_u8(&sh.fill);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        vst1q_u8(d, vorrq_u8(vqtbl1q_u8(vld1q_u8(s), mask), fill));
        i += 16;
    }
    shuffle_rest(&src[i..], &mut dst[i..], sh);
}

// Loads 16 source bytes, consumes 12 (four 3bpp pixels).
#[rite]
pub(super) fn shuffle3_row_neon(_token: NeonToken, src: &[u8], dst: &mut [u8], sh: &PixelShuffle) {
    let mask = vld1q_u8(&sh.lane);
    let fill = vld1q_u8(&sh.fill);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 16 <= slen && id + 16 <= dlen {
        let s: &[u8; 16] = src[is..is + 16].try_into().unwrap();
        let d: &mut [u8; 16] = (&mut dst[id..id + 16]).try_into().unwrap();
        vst1q_u8(d, vorrq_u8(vqtbl1q_u8(vld1q_u8(s), mask), fill));
        is += 12;
        id += 16;
    }
    shuffle_rest(&src[is..], &mut dst[id..], sh);
}

#[rite]
pub(super) fn gray8_row_neon(_token: NeonToken, src: &[u8], dst: &mut [u8]) {
    let m: [_; 4] = core::array::from_fn(|i| vld1q_u8(&GRAY_EXPAND[i]));
    let alpha = vld1q_u8(&ALPHA_FF);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 16 <= slen && id + 64 <= dlen {
        let s: &[u8; 16] = src[is..is + 16].try_into().unwrap();
        let grays = vld1q_u8(s);
        for (j, mask) in m.iter().enumerate() {
            let d: &mut [u8; 16] = (&mut dst[id + j * 16..id + (j + 1) * 16])
                .try_into()
                .unwrap();
            vst1q_u8(d, vorrq_u8(vqtbl1q_u8(grays, *mask), alpha));
        }
        is += 16;
        id += 64;
    }
    gray8_rest(&src[is..], &mut dst[id..]);
}

#[rite]
pub(super) fn gray16_row_neon(_token: NeonToken, src: &[u8], dst: &mut [u8], dec: Decimate) {
    let lo = vld1q_u8(&GRAY16_EXPAND[0]);
    let hi = vld1q_u8(&GRAY16_EXPAND[1]);
    let alpha = vld1q_u8(&ALPHA_FF);
    let base = vdupq_n_u16(dec.base);
    let parity = vdupq_n_u16(dec.parity);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 16 <= slen && id + 32 <= dlen {
        let s: &[u8; 16] = src[is..is + 16].try_into().unwrap();
        let v = vreinterpretq_u16_u8(vld1q_u8(s));
        let odd = vandq_u16(vshrq_n_u16::<8>(v), parity);
        let g = vreinterpretq_u8_u16(vshrq_n_u16::<8>(vqaddq_u16(v, vaddq_u16(base, odd))));
        let d0: &mut [u8; 16] = (&mut dst[id..id + 16]).try_into().unwrap();
        vst1q_u8(d0, vorrq_u8(vqtbl1q_u8(g, lo), alpha));
        let d1: &mut [u8; 16] = (&mut dst[id + 16..id + 32]).try_into().unwrap();
        vst1q_u8(d1, vorrq_u8(vqtbl1q_u8(g, hi), alpha));
        is += 16;
        id += 32;
    }
    gray16_rest(&src[is..], &mut dst[id..], dec);
}

// ===========================================================================
// ARM arcane wrappers
// ===========================================================================

#[arcane]
pub(super) fn shuffle4_impl_neon(t: NeonToken, s: &[u8], d: &mut [u8], sh: PixelShuffle) {
    shuffle4_row_neon(t, s, d, &sh);
}
#[arcane]
pub(super) fn shuffle3_impl_neon(t: NeonToken, s: &[u8], d: &mut [u8], sh: PixelShuffle) {
    shuffle3_row_neon(t, s, d, &sh);
}
#[arcane]
pub(super) fn gray8_impl_neon(t: NeonToken, s: &[u8], d: &mut [u8]) {
    gray8_row_neon(t, s, d);
}
#[arcane]
pub(super) fn gray16_impl_neon(t: NeonToken, s: &[u8], d: &mut [u8], dec: Decimate) {
    gray16_row_neon(t, s, d, dec);
}
