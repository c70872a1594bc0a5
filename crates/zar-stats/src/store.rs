//! The stats store: per-die histories over a key/value backend.

use std::path::PathBuf;

use tracing::{debug, warn};
use zar_core::DieType;

use crate::backend::{FileBackend, KvBackend, MemoryBackend};
use crate::error::{StatsError, StatsResult};
use crate::stats::DieStats;

/// Loads and saves [`DieStats`] under the key `diceStats-<die>`.
pub struct StatsStore {
    backend: Box<dyn KvBackend>,
}

impl std::fmt::Debug for StatsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsStore").finish_non_exhaustive()
    }
}

impl StatsStore {
    /// Wrap a backend.
    pub fn new(backend: impl KvBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// A store backed by JSON files in `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(FileBackend::new(dir))
    }

    /// Storage key for a die's history.
    pub fn key(die: DieType) -> String {
        format!("diceStats-{die}")
    }

    /// Load a die's history; `None` if nothing was ever saved.
    ///
    /// Blobs that parse but break the history invariants are rejected as
    /// [`StatsError::Corrupt`].
    pub fn load(&self, die: DieType) -> StatsResult<Option<DieStats>> {
        let key = Self::key(die);
        let Some(blob) = self.backend.get(&key)? else {
            return Ok(None);
        };
        let stats: DieStats = serde_json::from_str(&blob)?;
        stats
            .validate(die)
            .map_err(|reason| StatsError::Corrupt { key, reason })?;
        Ok(Some(stats))
    }

    /// Load a die's history, falling back to an empty one.
    ///
    /// Unreadable or corrupt blobs are logged and discarded.
    pub fn load_or_default(&self, die: DieType) -> DieStats {
        match self.load(die) {
            Ok(Some(stats)) => {
                debug!(die = %die, rolls = stats.count(), "loaded stats");
                stats
            }
            Ok(None) => DieStats::new(),
            Err(e) => {
                warn!(die = %die, error = %e, "discarding stored stats");
                DieStats::new()
            }
        }
    }

    /// Persist a die's history.
    pub fn save(&self, die: DieType, stats: &DieStats) -> StatsResult<()> {
        let blob = serde_json::to_string(stats)?;
        self.backend.set(&Self::key(die), &blob)
    }

    /// Delete a die's stored history.
    pub fn clear(&self, die: DieType) -> StatsResult<()> {
        self.backend.remove(&Self::key(die))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn keys_follow_die_tags() {
        assert_eq!(StatsStore::key(DieType::D20), "diceStats-d20");
        assert_eq!(StatsStore::key(DieType::D4), "diceStats-d4");
    }

    #[test]
    fn absent_loads_as_none() {
        let store = StatsStore::in_memory();
        assert!(store.load(DieType::D6).unwrap().is_none());
        assert_eq!(store.load_or_default(DieType::D6), DieStats::new());
    }

    #[test]
    fn d20_history_round_trips() {
        let store = StatsStore::in_memory();
        let mut stats = DieStats::new();
        for v in [5, 12, 20] {
            stats.record(v);
        }
        store.save(DieType::D20, &stats).unwrap();

        let loaded = store.load(DieType::D20).unwrap().unwrap();
        assert_eq!(loaded.count(), 3);
        assert_eq!(loaded.history(), &[5, 12, 20]);
        assert_eq!(loaded, stats);
    }

    #[test]
    fn save_unchanged_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = StatsStore::in_dir(dir.path());
        store
            .save(DieType::D8, &DieStats::from_rolls([1, 8, 3]))
            .unwrap();

        let first = store.load(DieType::D8).unwrap().unwrap();
        store.save(DieType::D8, &first).unwrap();
        let second = store.load(DieType::D8).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn dice_are_stored_independently() {
        let store = StatsStore::in_memory();
        store.save(DieType::D4, &DieStats::from_rolls([2])).unwrap();
        assert!(store.load(DieType::D6).unwrap().is_none());
        assert_eq!(store.load(DieType::D4).unwrap().unwrap().history(), &[2]);
    }

    #[test]
    fn corrupt_blob_is_rejected() {
        let kv = MemoryBackend::new();
        kv.set("diceStats-d6", r#"{"rolls":[9],"total":1}"#).unwrap();
        let store = StatsStore::new(kv);
        assert!(matches!(
            store.load(DieType::D6),
            Err(StatsError::Corrupt { ref key, .. }) if key == "diceStats-d6"
        ));
        assert_eq!(store.load_or_default(DieType::D6), DieStats::new());
    }

    #[test]
    fn malformed_blob_is_json_error() {
        let kv = MemoryBackend::new();
        kv.set("diceStats-d12", "not json").unwrap();
        let store = StatsStore::new(kv);
        assert!(matches!(store.load(DieType::D12), Err(StatsError::Json(_))));
    }

    #[test]
    fn miscounted_blob_is_discarded() {
        let kv = MemoryBackend::new();
        kv.set("diceStats-d4", r#"{"rolls":[1,2],"total":9}"#).unwrap();
        let store = StatsStore::new(kv);
        assert!(matches!(store.load(DieType::D4), Err(StatsError::Json(_))));
        assert_eq!(store.load_or_default(DieType::D4), DieStats::new());
    }

    #[test]
    fn clear_removes_history() {
        let store = StatsStore::in_memory();
        store.save(DieType::D10, &DieStats::from_rolls([10])).unwrap();
        store.clear(DieType::D10).unwrap();
        assert!(store.load(DieType::D10).unwrap().is_none());
    }
}
