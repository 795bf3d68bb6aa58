use crate::PixelFormat;

/// Buffer-shape errors from the row-level [`bytes`](crate::bytes) kernels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SizeError {
    /// Source length is zero or not a whole number of pixels.
    #[error("buffer is empty or not a whole number of pixels")]
    NotPixelAligned,

    /// Destination holds fewer pixels than the source.
    #[error("destination is smaller than the source pixel count")]
    PixelCountMismatch,

    /// Source stride cannot hold the channel offsets of the layout.
    #[error("source stride does not fit the channel layout")]
    InvalidStride,
}

/// Why a frame could not be converted even though its format is supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MalformedFrame {
    #[error("source too short: need {needed} bytes, got {actual}")]
    SourceTooShort { needed: usize, actual: usize },

    #[error("destination must be exactly {expected} bytes, got {actual}")]
    DestinationSize { expected: usize, actual: usize },

    #[error("dimensions overflow: {width}x{height}")]
    DimensionsOverflow { width: u32, height: u32 },

    #[error("rows {start}..{end} outside image height {height}")]
    RowRange { start: u32, end: u32, height: u32 },

    /// An image container cannot represent zero-width rows.
    #[error("image of width 0 and height {height} has no representable rows")]
    ZeroWidth { height: u32 },

    #[error(transparent)]
    Size(#[from] SizeError),
}

/// Failure of a single frame conversion.
///
/// Neither variant is fatal: the caller skips drawing the frame and keeps
/// processing the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The declared format is not one of the convertible layouts.
    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(PixelFormat),

    /// Buffers do not match the declared dimensions.
    #[error("malformed frame: {0}")]
    MalformedFrame(#[from] MalformedFrame),
}

impl ConvertError {
    /// Whether the frame was rejected for its format rather than its buffers.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ConvertError::UnsupportedFormat(_))
    }
}

impl From<SizeError> for ConvertError {
    fn from(e: SizeError) -> Self {
        ConvertError::MalformedFrame(MalformedFrame::Size(e))
    }
}

/// A pixel format name that matches no known identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown pixel format name")]
pub struct ParseFormatError;
