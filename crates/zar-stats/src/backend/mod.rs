//! Key/value backends that hold serialized stats blobs.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::StatsResult;

/// A string key/value store.
///
/// Methods take `&self`: backends are shared by every die on a board and
/// manage their own interior state.
pub trait KvBackend {
    /// Read the value under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> StatsResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StatsResult<()>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> StatsResult<()>;
}
