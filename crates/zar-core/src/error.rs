//! Error types for dice construction, rolling, and batching.

use crate::die::DieType;

/// Errors that can occur while building or rolling dice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A face count outside {4, 6, 8, 10, 12, 20} was requested.
    #[error("unsupported die type: {0} faces")]
    UnsupportedDieType(u32),

    /// A die tag could not be parsed.
    #[error("unknown die: {0}")]
    UnknownDie(String),

    /// The die is valid but not hosted here.
    #[error("{0} is not on this board")]
    NotOnBoard(DieType),

    /// The die is still rolling; the request was ignored.
    #[error("{0} is already rolling")]
    AlreadyRolling(DieType),

    /// A multi-roll was requested with no dice selected.
    #[error("select at least one die")]
    EmptySelection,

    /// The UI has no result slot for this die.
    #[error("no UI target for {0}")]
    MissingUiTarget(DieType),

    /// Another multi-roll batch has not completed yet.
    #[error("a multi-roll is already in progress")]
    BatchInProgress,
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
