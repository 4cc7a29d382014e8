//! Error types shared across the workspace

use thiserror::Error;

/// Result type alias for common operations
pub type Result<T> = std::result::Result<T, Top10Error>;

/// Errors raised by the shared helpers
#[derive(Error, Debug)]
pub enum Top10Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Unknown region: {0}")]
    UnknownRegion(String),
}
