//! Pixel format identifiers as declared by camera drivers.

use core::fmt;
use core::str::FromStr;

use crate::ParseFormatError;

/// Source pixel layout declared alongside a raw camera frame.
///
/// This is the full set a driver may report. Only the packed RGB family and
/// `Y8`/`Y16` convert to RGBA; see [`PixelFormat::is_convertible`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PixelFormat {
    #[default]
    Unknown,
    I420,
    Yv12,
    Nv12,
    Nv21,
    Uyvy,
    Yuy2,
    Argb,
    Bgra,
    Bgr,
    Bgrx,
    Rgba,
    Rgbx,
    Rgb,
    Mjpeg,
    Y8,
    Y16,
    Z16,
}

const WIRE_PREFIX: &str = "PIXEL_FORMAT_";

impl PixelFormat {
    /// Every format [`convert`](crate::convert) accepts.
    pub const CONVERTIBLE: [PixelFormat; 9] = [
        PixelFormat::Bgra,
        PixelFormat::Bgrx,
        PixelFormat::Bgr,
        PixelFormat::Rgba,
        PixelFormat::Rgbx,
        PixelFormat::Rgb,
        PixelFormat::Argb,
        PixelFormat::Y8,
        PixelFormat::Y16,
    ];

    /// Every declared identifier, convertible or not.
    pub const ALL: [PixelFormat; 18] = [
        PixelFormat::Unknown,
        PixelFormat::I420,
        PixelFormat::Yv12,
        PixelFormat::Nv12,
        PixelFormat::Nv21,
        PixelFormat::Uyvy,
        PixelFormat::Yuy2,
        PixelFormat::Argb,
        PixelFormat::Bgra,
        PixelFormat::Bgr,
        PixelFormat::Bgrx,
        PixelFormat::Rgba,
        PixelFormat::Rgbx,
        PixelFormat::Rgb,
        PixelFormat::Mjpeg,
        PixelFormat::Y8,
        PixelFormat::Y16,
        PixelFormat::Z16,
    ];

    /// Short name without the wire prefix, e.g. `"BGRA"`.
    pub const fn short_name(self) -> &'static str {
        match self {
            PixelFormat::Unknown => "UNKNOWN",
            PixelFormat::I420 => "I420",
            PixelFormat::Yv12 => "YV12",
            PixelFormat::Nv12 => "NV12",
            PixelFormat::Nv21 => "NV21",
            PixelFormat::Uyvy => "UYVY",
            PixelFormat::Yuy2 => "YUY2",
            PixelFormat::Argb => "ARGB",
            PixelFormat::Bgra => "BGRA",
            PixelFormat::Bgr => "BGR",
            PixelFormat::Bgrx => "BGRX",
            PixelFormat::Rgba => "RGBA",
            PixelFormat::Rgbx => "RGBX",
            PixelFormat::Rgb => "RGB",
            PixelFormat::Mjpeg => "MJPEG",
            PixelFormat::Y8 => "Y8",
            PixelFormat::Y16 => "Y16",
            PixelFormat::Z16 => "Z16",
        }
    }

    /// Parse a wire name (`"PIXEL_FORMAT_BGRA"`) or short name (`"bgra"`).
    ///
    /// Unrecognized names map to [`PixelFormat::Unknown`], which the
    /// dispatcher then reports as unsupported.
    pub fn from_name(name: &str) -> PixelFormat {
        let short = match name.get(..WIRE_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(WIRE_PREFIX) => {
                &name[WIRE_PREFIX.len()..]
            }
            _ => name,
        };
        Self::ALL
            .into_iter()
            .find(|f| f.short_name().eq_ignore_ascii_case(short))
            .unwrap_or(PixelFormat::Unknown)
    }

    /// Map a ROS `sensor_msgs/Image` encoding to a format.
    ///
    /// 16-bit single channel maps to `Y16`; whether it is really depth is
    /// the caller's call.
    pub fn from_ros_encoding(encoding: &str) -> PixelFormat {
        match encoding {
            "bgra8" => PixelFormat::Bgra,
            "bgr8" => PixelFormat::Bgr,
            "rgba8" => PixelFormat::Rgba,
            "rgb8" => PixelFormat::Rgb,
            "8UC1" | "mono8" => PixelFormat::Y8,
            "16UC1" | "mono16" => PixelFormat::Y16,
            _ => PixelFormat::Unknown,
        }
    }

    /// ROS `sensor_msgs/Image` encoding, if one exists.
    pub const fn ros_encoding(self) -> Option<&'static str> {
        match self {
            PixelFormat::Bgra => Some("bgra8"),
            PixelFormat::Bgr => Some("bgr8"),
            PixelFormat::Rgba => Some("rgba8"),
            PixelFormat::Rgb => Some("rgb8"),
            PixelFormat::Y8 => Some("8UC1"),
            PixelFormat::Y16 | PixelFormat::Z16 => Some("16UC1"),
            _ => None,
        }
    }

    /// Whether every channel has a fixed byte width (no chroma subsampling,
    /// no compression).
    pub const fn has_fixed_size_channels(self) -> bool {
        matches!(
            self,
            PixelFormat::Bgra
                | PixelFormat::Bgr
                | PixelFormat::Bgrx
                | PixelFormat::Y8
                | PixelFormat::Y16
                | PixelFormat::Rgba
                | PixelFormat::Rgbx
                | PixelFormat::Rgb
                | PixelFormat::Argb
                | PixelFormat::Z16
        )
    }

    /// Whether [`convert`](crate::convert) can turn this format into RGBA8.
    pub fn is_convertible(self) -> bool {
        crate::lookup(self).is_some()
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{WIRE_PREFIX}{}", self.short_name())
    }
}

impl FromStr for PixelFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = PixelFormat::from_name(s);
        let named_unknown = s.eq_ignore_ascii_case("UNKNOWN")
            || s.eq_ignore_ascii_case("PIXEL_FORMAT_UNKNOWN");
        if parsed == PixelFormat::Unknown && !named_unknown {
            return Err(ParseFormatError);
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn names_roundtrip_through_display() {
        for f in PixelFormat::ALL {
            let wire = f.to_string();
            assert!(wire.starts_with("PIXEL_FORMAT_"));
            assert_eq!(PixelFormat::from_name(&wire), f);
            assert_eq!(PixelFormat::from_name(f.short_name()), f);
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(PixelFormat::from_name("bgra"), PixelFormat::Bgra);
        assert_eq!(PixelFormat::from_name("pixel_format_y16"), PixelFormat::Y16);
        assert_eq!(PixelFormat::from_name("Rgbx"), PixelFormat::Rgbx);
    }

    #[test]
    fn unknown_names() {
        assert_eq!(PixelFormat::from_name("HSV"), PixelFormat::Unknown);
        assert_eq!(PixelFormat::from_name(""), PixelFormat::Unknown);
        assert_eq!(PixelFormat::from_name("PIXEL_FORMAT_"), PixelFormat::Unknown);
        assert_eq!("HSV".parse::<PixelFormat>(), Err(ParseFormatError));
        assert_eq!("unknown".parse::<PixelFormat>(), Ok(PixelFormat::Unknown));
        assert_eq!("PIXEL_FORMAT_ARGB".parse::<PixelFormat>(), Ok(PixelFormat::Argb));
    }

    #[test]
    fn ros_encodings() {
        assert_eq!(PixelFormat::from_ros_encoding("bgr8"), PixelFormat::Bgr);
        assert_eq!(PixelFormat::from_ros_encoding("16UC1"), PixelFormat::Y16);
        assert_eq!(PixelFormat::from_ros_encoding("mono8"), PixelFormat::Y8);
        assert_eq!(PixelFormat::from_ros_encoding("yuv422"), PixelFormat::Unknown);
        assert_eq!(PixelFormat::Z16.ros_encoding(), Some("16UC1"));
        assert_eq!(PixelFormat::Nv12.ros_encoding(), None);
        let mapped = [
            PixelFormat::Bgra,
            PixelFormat::Bgr,
            PixelFormat::Rgba,
            PixelFormat::Rgb,
            PixelFormat::Y8,
            PixelFormat::Y16,
        ];
        for f in mapped {
            assert_eq!(PixelFormat::from_ros_encoding(f.ros_encoding().unwrap()), f);
        }
    }

    #[test]
    fn convertible_set() {
        for f in PixelFormat::ALL {
            assert_eq!(f.is_convertible(), PixelFormat::CONVERTIBLE.contains(&f), "{f}");
        }
        assert!(PixelFormat::Z16.has_fixed_size_channels());
        assert!(!PixelFormat::Z16.is_convertible());
        assert!(!PixelFormat::Mjpeg.has_fixed_size_channels());
    }
}
