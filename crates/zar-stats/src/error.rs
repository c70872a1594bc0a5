//! Error types for stats persistence.

use thiserror::Error;

/// Result type for stats operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur while loading or saving roll history.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The backend could not be read or written.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored blob is not valid JSON for `DieStats`.
    #[error("malformed stats blob: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored blob parsed but breaks the history invariants.
    #[error("corrupt stats under '{key}': {reason}")]
    Corrupt {
        /// Storage key of the blob.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
}
