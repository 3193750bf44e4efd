use alloc::string::String;

/// Errors from PGM decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GraymapError {
    #[error("unsupported descriptor: {0}")]
    UnsupportedDescriptor(String),

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("malformed sample data: {0}")]
    MalformedSample(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}
