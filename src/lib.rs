//! # camrgba
//!
//! Turn whatever a camera driver hands you into canonical RGBA8.
//!
//! Frames arrive tagged with a pixel format (`BGRA`, `BGRX`, `BGR`, `RGBA`,
//! `RGBX`, `RGB`, `ARGB`, `Y8`, `Y16`) and get written into a caller-owned
//! buffer of exactly `width × height × 4` bytes, R-G-B-A order per pixel.
//! Missing alpha is synthesized as 255, 16-bit gray is decimated to 8 bits.
//! Formats outside that set are reported as
//! [`ConvertError::UnsupportedFormat`] and leave the destination untouched.
//!
//! Row loops are SIMD-accelerated on x86-64 AVX2, ARM NEON and WASM SIMD128
//! with automatic fallback to scalar code.
//!
//! ```rust
//! use camrgba::{convert, PixelFormat};
//!
//! let bgra = [30u8, 20, 10, 40];
//! let mut rgba = [0u8; 4];
//! convert(&mut rgba, 1, 1, &bgra, PixelFormat::Bgra).unwrap();
//! assert_eq!(rgba, [10, 20, 30, 40]);
//! ```
//!
//! ## Feature flags
//!
//! - **`std`** (default): runtime CPU feature detection.
//! - **`rgb`**: convert straight into `&mut [rgb::Rgba<u8>]`.
//! - **`imgref`**: whole-image conversion into [`imgref`] buffers. Implies `rgb`.
//! - **`rayon`**: convert row bands in parallel on the rayon pool.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod bytes;
mod convert;
mod error;
mod format;
mod frame;
mod gray;
mod options;
mod packed;
mod registry;

pub use convert::{
    Conversion, convert, convert_frame, convert_frame_with, convert_rows, convert_with,
};
pub use error::{ConvertError, MalformedFrame, ParseFormatError, SizeError};
pub use format::PixelFormat;
pub use frame::Frame;
pub use gray::{convert_grayscale, convert_grayscale_with};
pub use options::{ConvertOptions, ThreeChannelStride, Y16Rounding};
pub use packed::{convert_packed, convert_packed_with};
pub use registry::{BitDepth, ChannelIndexMap, GrayscaleDescriptor, SourceLayout, lookup};

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod img;

#[cfg(feature = "rayon")]
pub mod parallel;
