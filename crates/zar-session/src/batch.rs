//! Multi-roll batches: collecting per-die outcomes and summing them.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::warn;
use zar_core::DieType;

/// Identifies one multi-roll batch on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchId(pub u64);

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Gathers outcomes for a batch as its dice settle, in any order.
///
/// Each selected die is recorded exactly once: either with a value or with
/// `None` when it was skipped. Later records for the same die are ignored.
#[derive(Debug)]
pub(crate) struct BatchCollector {
    id: BatchId,
    pending: BTreeSet<DieType>,
    results: BTreeMap<DieType, Option<u32>>,
}

impl BatchCollector {
    pub(crate) fn new(id: BatchId, selection: BTreeSet<DieType>) -> Self {
        Self {
            id,
            pending: selection,
            results: BTreeMap::new(),
        }
    }

    /// Record a die's outcome. Returns `false` if it was not expected.
    pub(crate) fn record(&mut self, die: DieType, value: Option<u32>) -> bool {
        if !self.pending.remove(&die) {
            warn!(batch = %self.id, die = %die, "ignoring repeated or unselected outcome");
            return false;
        }
        self.results.insert(die, value);
        true
    }

    pub(crate) fn id(&self) -> BatchId {
        self.id
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take the outcomes recorded so far.
    pub(crate) fn finish(&mut self) -> BatchSummary {
        BatchSummary {
            id: self.id,
            results: std::mem::take(&mut self.results),
        }
    }
}

/// The outcome of a completed batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    id: BatchId,
    results: BTreeMap<DieType, Option<u32>>,
}

impl BatchSummary {
    /// Build a summary directly from outcomes.
    pub fn new(id: BatchId, results: BTreeMap<DieType, Option<u32>>) -> Self {
        Self { id, results }
    }

    /// The batch this summarizes.
    pub fn id(&self) -> BatchId {
        self.id
    }

    /// Every selected die with its result, `None` if it produced none.
    pub fn results(&self) -> &BTreeMap<DieType, Option<u32>> {
        &self.results
    }

    /// The result for one die, if it rolled in this batch.
    pub fn value(&self, die: DieType) -> Option<u32> {
        self.results.get(&die).copied().flatten()
    }

    /// Dice that produced a result, ascending.
    pub fn rolled(&self) -> impl Iterator<Item = (DieType, u32)> + '_ {
        self.results
            .iter()
            .filter_map(|(&die, &value)| value.map(|v| (die, v)))
    }

    /// Dice that were selected but produced no result.
    pub fn skipped(&self) -> impl Iterator<Item = DieType> + '_ {
        self.results
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(&die, _)| die)
    }

    /// Sum of all present results.
    pub fn total(&self) -> u32 {
        self.rolled().map(|(_, v)| v).sum()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (die, value) in self.rolled() {
            writeln!(f, "{}: {value}", die.label())?;
        }
        write!(f, "\nTOTAL: {}", self.total())
    }
}
