use alloc::string::String;
use enough::StopReason;

/// Errors from canvas creation and farbfeld decoding/encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CanvasError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for CanvasError {
    fn from(r: StopReason) -> Self {
        CanvasError::Cancelled(r)
    }
}
