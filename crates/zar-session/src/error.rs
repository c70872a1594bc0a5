//! Error types for board operations.

use thiserror::Error;
use zar_core::DiceError;
use zar_stats::StatsError;

/// Result type for board operations that touch storage.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors from board operations that touch storage.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A dice-level condition, such as the die still rolling.
    #[error(transparent)]
    Dice(#[from] DiceError),

    /// The stats store failed.
    #[error(transparent)]
    Stats(#[from] StatsError),
}
