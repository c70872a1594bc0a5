//! Per-die roll history.

use serde::{Deserialize, Serialize};
use zar_core::DieType;

/// Append-only history of one die's settled results.
///
/// Serialized as `{"rolls": [...], "total": n}` where `total` is the number
/// of rolls. `total` always equals the history length; blobs where it does
/// not are rejected at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDieStats")]
pub struct DieStats {
    #[serde(rename = "rolls")]
    history: Vec<u32>,
    #[serde(rename = "total")]
    count: usize,
}

/// The stored blob before the count invariant is checked.
#[derive(Deserialize)]
struct RawDieStats {
    rolls: Vec<u32>,
    total: usize,
}

impl TryFrom<RawDieStats> for DieStats {
    type Error = String;

    fn try_from(raw: RawDieStats) -> Result<Self, Self::Error> {
        if raw.total != raw.rolls.len() {
            return Err(format!(
                "total is {} but {} rolls are recorded",
                raw.total,
                raw.rolls.len()
            ));
        }
        Ok(Self::from_rolls(raw.rolls))
    }
}

impl DieStats {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History holding `rolls`, oldest first.
    pub fn from_rolls(rolls: impl IntoIterator<Item = u32>) -> Self {
        let history: Vec<u32> = rolls.into_iter().collect();
        let count = history.len();
        Self { history, count }
    }

    /// Append a settled result.
    pub fn record(&mut self, value: u32) {
        self.history.push(value);
        self.count = self.history.len();
    }

    /// All results, oldest first.
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    /// Number of recorded rolls.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether nothing has been rolled yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The most recent result.
    pub fn last_roll(&self) -> Option<u32> {
        self.history.last().copied()
    }

    /// Mean of all results, or `None` if empty.
    pub fn mean(&self) -> Option<f64> {
        if self.history.is_empty() {
            return None;
        }
        let sum: u64 = self.history.iter().map(|&v| u64::from(v)).sum();
        Some(sum as f64 / self.history.len() as f64)
    }

    /// How often each face came up, indexed by `value - 1`.
    pub fn frequencies(&self, die: DieType) -> Vec<usize> {
        let mut out = vec![0; die.faces() as usize];
        for &v in &self.history {
            if let Some(slot) = v.checked_sub(1).and_then(|i| out.get_mut(i as usize)) {
                *slot += 1;
            }
        }
        out
    }

    /// Check that every value is a face of `die`.
    pub fn validate(&self, die: DieType) -> Result<(), String> {
        if let Some(bad) = self.history.iter().find(|&&v| v == 0 || v > die.faces()) {
            return Err(format!("{bad} is not a face of {die}"));
        }
        Ok(())
    }
}
