//! Roll history and its persistence for Zar.
//!
//! Each die type keeps an append-only history of settled results. Histories
//! are stored as small JSON blobs under per-die keys in a key/value backend,
//! either in memory or as files in a directory.

pub mod backend;
pub mod error;
pub mod stats;
pub mod store;

pub use backend::{FileBackend, KvBackend, MemoryBackend};
pub use error::{StatsError, StatsResult};
pub use stats::DieStats;
pub use store::StatsStore;
