//! Error types for the gvid codec.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Error, Debug)]
pub enum CodecError {
    /// Width or height is zero or odd, or the frame size overflows
    #[error("Invalid dimensions {width}x{height}: sides must be positive and even with a frame size that fits in usize")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Frame size mismatch for {format}: expected {expected} bytes, got {actual}")]
    FrameSizeMismatch {
        format: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Input ended part way through a raw frame
    #[error("Incomplete frame: input ended after {available} of {expected} bytes")]
    IncompleteFrame { expected: usize, available: usize },

    /// Decompressed stream does not split into whole frames
    #[error("Truncated stream: final chunk has {available} of {expected} bytes")]
    TruncatedStream { expected: usize, available: usize },

    #[error("Invalid frame size {0}: frames must be at least one byte")]
    InvalidFrameSize(usize),

    #[error("Frame length mismatch: previous frame has {previous} bytes, current has {current}")]
    LengthMismatch { previous: usize, current: usize },

    #[error("Malformed run-length stream: {0}")]
    MalformedRunLength(String),

    #[error("Compression backend error: {0}")]
    Compression(#[source] std::io::Error),

    #[error("Decompression backend error: {0}")]
    Decompression(#[source] std::io::Error),

    #[error("Unknown entropy backend {0:?}, expected one of: deflate, zlib")]
    UnknownBackend(String),

    #[error("Unknown compression level {0:?}, expected one of: none, fast, default, best")]
    UnknownCompressionLevel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
