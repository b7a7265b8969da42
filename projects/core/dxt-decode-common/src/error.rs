//! Error types for block decode operations.

use thiserror::Error;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a BC1, BC2 or BC3 block stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input ends before the block grid for the requested dimensions does.
    #[error("Input too short: block at offset {offset} needs {required} bytes of input, but only {actual} bytes are available.")]
    InputTooShort {
        /// Byte offset of the first block that does not fit in the input
        offset: usize,
        /// Number of input bytes needed by the block grid
        required: usize,
        /// The actual input length in bytes
        actual: usize,
    },

    /// The output buffer is too small for the decoded raster.
    #[error("Output buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    OutputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The raster or block stream size does not fit in `usize`.
    #[error("Image dimensions {width}x{height} are too large to decode on this platform.")]
    DimensionsTooLarge {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
}
