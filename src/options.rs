/// Rounding rule for 16-bit → 8-bit gray decimation (`v / 256`).
///
/// Every rule saturates at 255, so `65535` stays white.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Y16Rounding {
    /// Halves round up: `128 → 1`, `384 → 2`, `640 → 3`.
    #[default]
    HalfUp,
    /// Halves round to the even neighbour: `128 → 0`, `384 → 2`, `640 → 2`.
    HalfEven,
    /// Keep the high byte: `v >> 8`.
    Truncate,
}

impl Y16Rounding {
    /// `(base, parity)` such that `v8 = sat(v + base + ((v >> 8) & parity)) >> 8`.
    pub(crate) const fn bias(self) -> (u16, u16) {
        match self {
            Y16Rounding::HalfUp => (128, 0),
            Y16Rounding::HalfEven => (127, 1),
            Y16Rounding::Truncate => (0, 0),
        }
    }

    /// Decimate one sample.
    #[inline(always)]
    pub const fn decimate(self, v: u16) -> u8 {
        let (base, parity) = self.bias();
        (v.saturating_add(base + ((v >> 8) & parity)) >> 8) as u8
    }
}

/// Source stride of the 3-channel formats `RGB` and `BGR`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ThreeChannelStride {
    /// Four bytes per pixel, the fourth ignored. Same stride as `RGBX`/`BGRX`.
    #[default]
    Padded,
    /// Three bytes per pixel, no padding.
    Packed,
}

impl ThreeChannelStride {
    pub const fn bytes(self) -> usize {
        match self {
            ThreeChannelStride::Padded => 4,
            ThreeChannelStride::Packed => 3,
        }
    }
}

/// Knobs for [`convert_with`](crate::convert_with) and friends.
///
/// `Default` gives the viewer's behavior: half-up rounding, padded
/// 3-channel stride.
///
/// ```
/// use camrgba::{ConvertOptions, ThreeChannelStride, Y16Rounding};
///
/// let opts = ConvertOptions::new()
///     .with_y16_rounding(Y16Rounding::HalfEven)
///     .with_three_channel_stride(ThreeChannelStride::Packed);
/// assert_eq!(opts.three_channel_stride.bytes(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ConvertOptions {
    pub y16_rounding: Y16Rounding,
    pub three_channel_stride: ThreeChannelStride,
}

impl ConvertOptions {
    pub const fn new() -> Self {
        Self {
            y16_rounding: Y16Rounding::HalfUp,
            three_channel_stride: ThreeChannelStride::Padded,
        }
    }

    pub const fn with_y16_rounding(mut self, rounding: Y16Rounding) -> Self {
        self.y16_rounding = rounding;
        self
    }

    pub const fn with_three_channel_stride(mut self, stride: ThreeChannelStride) -> Self {
        self.three_channel_stride = stride;
        self
    }
}
