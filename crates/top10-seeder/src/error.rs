//! Error types for the seeding pipeline
//!
//! Every variant describes a failure that aborts the run. Best-effort stages
//! never surface here; see [`crate::stage::StageOutcome`].

use crate::fetcher::FetchError;
use crate::store::StoreError;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, SeedError>;

#[derive(Error, Debug)]
pub enum SeedError {
    /// Encyclopedia request failed after the retry policy gave up
    #[error("Encyclopedia request failed for '{place}': {source}")]
    Fetch {
        place: String,
        #[source]
        source: FetchError,
    },

    #[error("Fetcher setup failed: {0}")]
    Fetcher(#[from] FetchError),

    /// Store write or read failed; the run must be repeated in full
    #[error("Store error: {0}. The seed script was not committed; re-run the full pipeline.")]
    Store(#[from] StoreError),

    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}. Check your environment variables or .env file.")]
    Config(String),
}

impl SeedError {
    pub fn fetch(place: impl Into<String>, source: FetchError) -> Self {
        Self::Fetch {
            place: place.into(),
            source,
        }
    }

    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
