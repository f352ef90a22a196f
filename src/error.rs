use alloc::string::String;
use enough::StopReason;

/// Errors from BMP header parsing and pixel decoding.
///
/// Every variant is terminal for the current decode call; nothing is
/// retried internally and no partial result is returned on failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("header too short: need {needed} bytes, got {actual}")]
    TruncatedHeader { needed: usize, actual: usize },

    #[error("unsupported feature: {0}")]
    Unsupported(String),

    #[error("pixel data ends before the declared geometry is satisfied")]
    TruncatedData,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: i32, height: i32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "std")]
    #[error("file extension {0:?} is not supported")]
    UnrecognizedExtension(String),

    #[cfg(feature = "std")]
    #[error("file not found: {0}")]
    NotFound(String),

    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
