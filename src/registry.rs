//! Static lookup from [`PixelFormat`] to source layout.

use crate::{ConvertOptions, PixelFormat};

/// Byte offsets of each channel within one source pixel.
///
/// A three-channel map has no alpha in the source; a four-channel map with
/// `a: None` has a padding byte where alpha would be. Both get opaque alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelIndexMap {
    Three { r: u8, g: u8, b: u8 },
    Four { r: u8, g: u8, b: u8, a: Option<u8> },
}

impl ChannelIndexMap {
    pub const RGBA: Self = Self::Four { r: 0, g: 1, b: 2, a: Some(3) };
    pub const RGBX: Self = Self::Four { r: 0, g: 1, b: 2, a: None };
    pub const RGB: Self = Self::Three { r: 0, g: 1, b: 2 };
    pub const BGRA: Self = Self::Four { r: 2, g: 1, b: 0, a: Some(3) };
    pub const BGRX: Self = Self::Four { r: 2, g: 1, b: 0, a: None };
    pub const BGR: Self = Self::Three { r: 2, g: 1, b: 0 };
    pub const ARGB: Self = Self::Four { r: 1, g: 2, b: 3, a: Some(0) };

    /// Offsets of R, G, B.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Three { r, g, b } | Self::Four { r, g, b, .. } => [r, g, b],
        }
    }

    /// Offset of a real alpha sample, `None` when alpha is synthesized.
    pub const fn alpha(self) -> Option<u8> {
        match self {
            Self::Three { .. } => None,
            Self::Four { a, .. } => a,
        }
    }

    pub const fn has_alpha(self) -> bool {
        self.alpha().is_some()
    }

    /// Number of entries in the map (3 or 4).
    pub const fn channels(self) -> usize {
        match self {
            Self::Three { .. } => 3,
            Self::Four { .. } => 4,
        }
    }

    /// Bytes per source pixel.
    ///
    /// Four-channel maps are always 4. Three-channel maps follow
    /// [`ConvertOptions::three_channel_stride`], padded to 4 by default.
    pub const fn source_stride(self, options: &ConvertOptions) -> usize {
        match self {
            Self::Three { .. } => options.three_channel_stride.bytes(),
            Self::Four { .. } => 4,
        }
    }

    /// Largest offset referenced by the map.
    pub(crate) const fn max_offset(self) -> u8 {
        let [r, g, b] = self.rgb();
        let mut max = if r > g { r } else { g };
        if b > max {
            max = b;
        }
        match self.alpha() {
            Some(a) if a > max => a,
            _ => max,
        }
    }
}

/// Bit depth of a single-channel gray source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    Eight,
    /// Little-endian `u16` samples.
    Sixteen,
}

impl BitDepth {
    pub const fn bytes(self) -> usize {
        match self {
            BitDepth::Eight => 1,
            BitDepth::Sixteen => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrayscaleDescriptor {
    pub bit_depth: BitDepth,
}

/// What a convertible format looks like in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceLayout {
    Packed(ChannelIndexMap),
    Gray(GrayscaleDescriptor),
}

impl SourceLayout {
    /// Bytes per source pixel under `options`.
    pub const fn source_stride(self, options: &ConvertOptions) -> usize {
        match self {
            SourceLayout::Packed(map) => map.source_stride(options),
            SourceLayout::Gray(g) => g.bit_depth.bytes(),
        }
    }
}

const Y8: GrayscaleDescriptor = GrayscaleDescriptor { bit_depth: BitDepth::Eight };
const Y16: GrayscaleDescriptor = GrayscaleDescriptor { bit_depth: BitDepth::Sixteen };

/// Look up the source layout of `format`; `None` means unsupported.
pub const fn lookup(format: PixelFormat) -> Option<SourceLayout> {
    use SourceLayout::{Gray, Packed};
    match format {
        PixelFormat::Rgba => Some(Packed(ChannelIndexMap::RGBA)),
        PixelFormat::Rgbx => Some(Packed(ChannelIndexMap::RGBX)),
        PixelFormat::Rgb => Some(Packed(ChannelIndexMap::RGB)),
        PixelFormat::Bgra => Some(Packed(ChannelIndexMap::BGRA)),
        PixelFormat::Bgrx => Some(Packed(ChannelIndexMap::BGRX)),
        PixelFormat::Bgr => Some(Packed(ChannelIndexMap::BGR)),
        PixelFormat::Argb => Some(Packed(ChannelIndexMap::ARGB)),
        PixelFormat::Y8 => Some(Gray(Y8)),
        PixelFormat::Y16 => Some(Gray(Y16)),
        PixelFormat::Unknown
        | PixelFormat::I420
        | PixelFormat::Yv12
        | PixelFormat::Nv12
        | PixelFormat::Nv21
        | PixelFormat::Uyvy
        | PixelFormat::Yuy2
        | PixelFormat::Mjpeg
        | PixelFormat::Z16 => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed(format: PixelFormat) -> ChannelIndexMap {
        match lookup(format) {
            Some(SourceLayout::Packed(map)) => map,
            other => panic!("{format}: expected packed layout, got {other:?}"),
        }
    }

    #[test]
    fn offsets_cover_the_pixel() {
        for f in PixelFormat::CONVERTIBLE {
            let Some(SourceLayout::Packed(map)) = lookup(f) else {
                continue;
            };
            let mut seen = [false; 4];
            for o in map.rgb() {
                seen[o as usize] = true;
            }
            if let Some(a) = map.alpha() {
                seen[a as usize] = true;
                assert_eq!(seen, [true; 4], "{f}");
            } else {
                assert_eq!(seen, [true, true, true, false], "{f}");
            }
            assert!(map.max_offset() < 4, "{f}");
        }
    }

    #[test]
    fn table_matches_layouts() {
        assert_eq!(packed(PixelFormat::Argb).rgb(), [1, 2, 3]);
        assert_eq!(packed(PixelFormat::Argb).alpha(), Some(0));
        assert_eq!(packed(PixelFormat::Bgrx).alpha(), None);
        assert_eq!(packed(PixelFormat::Bgrx).channels(), 4);
        assert_eq!(packed(PixelFormat::Bgr).channels(), 3);
        assert!(!packed(PixelFormat::Rgb).has_alpha());
        assert!(packed(PixelFormat::Bgra).has_alpha());
    }

    #[test]
    fn strides() {
        let padded = ConvertOptions::default();
        let tight = padded.with_three_channel_stride(crate::ThreeChannelStride::Packed);
        for f in [PixelFormat::Rgb, PixelFormat::Bgr] {
            let layout = lookup(f).unwrap();
            assert_eq!(layout.source_stride(&padded), 4);
            assert_eq!(layout.source_stride(&tight), 3);
        }
        for f in [PixelFormat::Rgbx, PixelFormat::Bgra, PixelFormat::Argb] {
            assert_eq!(lookup(f).unwrap().source_stride(&tight), 4);
        }
        assert_eq!(lookup(PixelFormat::Y8).unwrap().source_stride(&padded), 1);
        assert_eq!(lookup(PixelFormat::Y16).unwrap().source_stride(&padded), 2);
    }

    #[test]
    fn unsupported_formats() {
        for f in [PixelFormat::Unknown, PixelFormat::Nv12, PixelFormat::Mjpeg, PixelFormat::Z16] {
            assert_eq!(lookup(f), None);
        }
    }
}
