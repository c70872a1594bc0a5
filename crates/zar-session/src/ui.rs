//! The UI collaborator: where settled results are shown.

use zar_core::{DiceResult, DieType};
use zar_stats::DieStats;

use crate::batch::BatchSummary;

/// Result display surfaces for each die and for batch summaries.
pub trait DiceUi {
    /// Whether a result slot exists for `die`.
    fn has_target(&self, die: DieType) -> bool;

    /// Show a settled result and the die's updated history.
    ///
    /// Fails with [`DiceError::MissingUiTarget`](zar_core::DiceError::MissingUiTarget)
    /// when the die has no slot.
    fn show_roll(&self, die: DieType, value: u32, stats: &DieStats) -> DiceResult<()>;

    /// Show a completed batch.
    fn show_batch(&self, summary: &BatchSummary);
}
