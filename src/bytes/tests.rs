extern crate alloc;
extern crate std;
use super::*;
use alloc::{vec, vec::Vec};
use archmage::testing::{CompileTimePolicy, for_each_token_permutation};

fn policy() -> CompileTimePolicy {
    if std::env::var_os("CI").is_some() {
        CompileTimePolicy::Fail
    } else {
        CompileTimePolicy::WarnStderr
    }
}

// --- Helpers to generate test data ---

fn make_bytes(n_pixels: usize, bpp: usize) -> Vec<u8> {
    (0..n_pixels * bpp).map(|i| (i % 251) as u8).collect()
}

// Samples spread over the whole u16 range, including the rounding halves.
fn make_gray16(n_pixels: usize) -> Vec<u8> {
    (0..n_pixels)
        .flat_map(|i| {
            let v = match i % 5 {
                0 => (i as u16).wrapping_mul(257),
                1 => ((i as u16) << 8) | 0x80,
                2 => u16::MAX - i as u16,
                3 => ((i as u16) << 8) | 0x7F,
                _ => (i as u16).wrapping_mul(40503),
            };
            v.to_le_bytes()
        })
        .collect()
}

// --- Reference (scalar-only) implementations for comparison ---

fn ref_packed(src: &[u8], map: ChannelIndexMap, bpp: usize) -> Vec<u8> {
    let [r, g, b] = map.rgb();
    let mut out = vec![0u8; src.len() / bpp * 4];
    for (s, d) in src.chunks_exact(bpp).zip(out.chunks_exact_mut(4)) {
        d[0] = s[r as usize];
        d[1] = s[g as usize];
        d[2] = s[b as usize];
        d[3] = map.alpha().map_or(255, |a| s[a as usize]);
    }
    out
}

fn ref_gray8(src: &[u8]) -> Vec<u8> {
    src.iter().flat_map(|&v| [v, v, v, 255]).collect()
}

fn ref_gray16(src: &[u8], rounding: Y16Rounding) -> Vec<u8> {
    src.chunks_exact(2)
        .flat_map(|s| {
            let v = u16::from_le_bytes([s[0], s[1]]) as u32;
            let q = v >> 8;
            let rem = v & 0xFF;
            let v8 = match rounding {
                Y16Rounding::Truncate => q,
                Y16Rounding::HalfUp => q + u32::from(rem >= 128),
                Y16Rounding::HalfEven => q + u32::from(rem > 128 || (rem == 128 && q & 1 == 1)),
            }
            .min(255) as u8;
            [v8, v8, v8, 255]
        })
        .collect()
}

const STRIDE4_MAPS: &[ChannelIndexMap] = &[
    ChannelIndexMap::RGBA,
    ChannelIndexMap::RGBX,
    ChannelIndexMap::BGRA,
    ChannelIndexMap::BGRX,
    ChannelIndexMap::ARGB,
    ChannelIndexMap::RGB,
    ChannelIndexMap::BGR,
];

const ROUNDINGS: &[Y16Rounding] = &[
    Y16Rounding::HalfUp,
    Y16Rounding::HalfEven,
    Y16Rounding::Truncate,
];

// Test sizes: small (remainder only), medium (SIMD + remainder), large (multiple SIMD chunks)
const TEST_PIXEL_COUNTS: &[usize] = &[
    1, 2, 3, 5, 7, 8, 11, 15, 16, 17, 31, 32, 33, 63, 64, 65, 100,
];

// -----------------------------------------------------------------------
// SIMD-dispatched operations: tested at every capability tier
// -----------------------------------------------------------------------

#[test]
fn permutation_packed_4bpp() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &map in STRIDE4_MAPS {
            for &n in TEST_PIXEL_COUNTS {
                let src = make_bytes(n, 4);
                let expected = ref_packed(&src, map, 4);
                let mut dst = vec![0u8; n * 4];
                packed_to_rgba(&src, &mut dst, map, 4).unwrap();
                assert_eq!(dst, expected, "{map:?} bpp=4 n={n} tier={perm}");
            }
        }
    });
    std::eprintln!("packed_4bpp: {report}");
}

#[test]
fn permutation_packed_3bpp() {
    let report = for_each_token_permutation(policy(), |perm| {
        for map in [ChannelIndexMap::RGB, ChannelIndexMap::BGR] {
            for &n in TEST_PIXEL_COUNTS {
                let src = make_bytes(n, 3);
                let expected = ref_packed(&src, map, 3);
                let mut dst = vec![0u8; n * 4];
                packed_to_rgba(&src, &mut dst, map, 3).unwrap();
                assert_eq!(dst, expected, "{map:?} bpp=3 n={n} tier={perm}");
            }
        }
    });
    std::eprintln!("packed_3bpp: {report}");
}

#[test]
fn permutation_gray8() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &n in TEST_PIXEL_COUNTS {
            let src = make_bytes(n, 1);
            let expected = ref_gray8(&src);
            let mut dst = vec![0u8; n * 4];
            gray8_to_rgba(&src, &mut dst).unwrap();
            assert_eq!(dst, expected, "gray8 n={n} tier={perm}");
        }
    });
    std::eprintln!("gray8: {report}");
}

#[test]
fn permutation_gray16() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &rounding in ROUNDINGS {
            for &n in TEST_PIXEL_COUNTS {
                let src = make_gray16(n);
                let expected = ref_gray16(&src, rounding);
                let mut dst = vec![0u8; n * 4];
                gray16_to_rgba(&src, &mut dst, rounding).unwrap();
                assert_eq!(dst, expected, "gray16 {rounding:?} n={n} tier={perm}");
            }
        }
    });
    std::eprintln!("gray16: {report}");
}

#[test]
fn permutation_gray16_every_sample() {
    let src: Vec<u8> = (0..=u16::MAX).flat_map(u16::to_le_bytes).collect();
    let report = for_each_token_permutation(policy(), |perm| {
        for &rounding in ROUNDINGS {
            let mut dst = vec![0u8; src.len() * 2];
            gray16_to_rgba(&src, &mut dst, rounding).unwrap();
            for (v, px) in (0..=u16::MAX).zip(dst.chunks_exact(4)) {
                let g = rounding.decimate(v);
                assert_eq!(px, [g, g, g, 255], "{rounding:?} v={v} tier={perm}");
            }
        }
    });
    std::eprintln!("gray16_every_sample: {report}");
}

// A destination longer than the source keeps its tail.
#[test]
fn permutation_oversized_destination() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &n in TEST_PIXEL_COUNTS {
            let mut dst = vec![0xAAu8; n * 4 + 64];
            packed_to_rgba(&make_bytes(n, 3), &mut dst, ChannelIndexMap::BGR, 3).unwrap();
            assert!(dst[n * 4..].iter().all(|&b| b == 0xAA), "bgr n={n} tier={perm}");

            let mut dst = vec![0xAAu8; n * 4 + 64];
            gray16_to_rgba(&make_gray16(n), &mut dst, Y16Rounding::HalfUp).unwrap();
            assert!(dst[n * 4..].iter().all(|&b| b == 0xAA), "gray16 n={n} tier={perm}");

            let mut dst = vec![0xAAu8; n * 4 + 64];
            gray8_to_rgba(&make_bytes(n, 1), &mut dst).unwrap();
            assert!(dst[n * 4..].iter().all(|&b| b == 0xAA), "gray8 n={n} tier={perm}");
        }
    });
    std::eprintln!("oversized_destination: {report}");
}

// -----------------------------------------------------------------------
// Shuffle tables
// -----------------------------------------------------------------------

#[test]
fn shuffle_tables() {
    let sh = PixelShuffle::new(ChannelIndexMap::ARGB, 4);
    assert_eq!(&sh.lane[..8], &[1, 2, 3, 0, 5, 6, 7, 4]);
    assert_eq!(sh.fill, [0; 16]);

    let sh = PixelShuffle::new(ChannelIndexMap::BGR, 3);
    assert_eq!(&sh.lane[..8], &[2, 1, 0, 0x80, 5, 4, 3, 0x80]);
    assert_eq!(&sh.fill[..8], &[0, 0, 0, 0xFF, 0, 0, 0, 0xFF]);
    assert_eq!(sh.lane[15], 0x80);
}

// -----------------------------------------------------------------------
// Size validation
// -----------------------------------------------------------------------

#[test]
fn test_size_errors() {
    // Not pixel-aligned
    assert_eq!(
        packed_to_rgba(&[0; 5], &mut [0; 8], ChannelIndexMap::RGBA, 4),
        Err(SizeError::NotPixelAligned)
    );
    assert_eq!(
        packed_to_rgba(&[0; 0], &mut [0; 8], ChannelIndexMap::RGBA, 4),
        Err(SizeError::NotPixelAligned)
    );
    assert_eq!(
        packed_to_rgba(&[0; 5], &mut [0; 8], ChannelIndexMap::RGB, 3),
        Err(SizeError::NotPixelAligned)
    );
    assert_eq!(
        gray16_to_rgba(&[0; 3], &mut [0; 8], Y16Rounding::HalfUp),
        Err(SizeError::NotPixelAligned)
    );

    // Pixel count mismatch (src aligned, dst too small)
    assert_eq!(
        packed_to_rgba(&[0; 6], &mut [0; 4], ChannelIndexMap::BGR, 3),
        Err(SizeError::PixelCountMismatch)
    );
    assert_eq!(
        gray8_to_rgba(&[0; 3], &mut [0; 8]),
        Err(SizeError::PixelCountMismatch)
    );
    assert_eq!(
        gray16_to_rgba(&[0; 4], &mut [0; 7], Y16Rounding::Truncate),
        Err(SizeError::PixelCountMismatch)
    );
}

#[test]
fn test_stride_errors() {
    // four-channel maps need 4 bytes
    assert_eq!(
        packed_to_rgba(&[0; 6], &mut [0; 8], ChannelIndexMap::BGRA, 3),
        Err(SizeError::InvalidStride)
    );
    assert_eq!(
        packed_to_rgba(&[0; 4], &mut [0; 8], ChannelIndexMap::RGB, 2),
        Err(SizeError::InvalidStride)
    );
    // offset past the pixel
    let wide = ChannelIndexMap::Three { r: 0, g: 1, b: 3 };
    assert_eq!(
        packed_to_rgba(&[0; 6], &mut [0; 8], wide, 3),
        Err(SizeError::InvalidStride)
    );
    assert_eq!(packed_to_rgba(&[0; 8], &mut [0; 8], wide, 4), Ok(()));
}
