use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KvBackend;
use crate::error::StatsResult;

/// Stores each key as `<root>/<key>.json`.
///
/// The root directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Use `root` as the storage directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> StatsResult<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StatsResult<()> {
        fs::create_dir_all(&self.root)?;
        // Replace atomically: write a sibling temp file, then rename over the target.
        let tmp = self.root.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, self.path(key)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> StatsResult<()> {
        match fs::remove_file(self.path(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let kv = FileBackend::new(dir.path());
        assert_eq!(kv.get("nothing").unwrap(), None);
    }

    #[test]
    fn creates_root_on_write() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("store");
        let kv = FileBackend::new(&root);
        kv.set("diceStats-d6", "{}").unwrap();
        assert!(root.join("diceStats-d6.json").is_file());
        assert_eq!(kv.get("diceStats-d6").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn overwrite_and_remove() {
        let dir = TempDir::new().unwrap();
        let kv = FileBackend::new(dir.path());
        kv.set("k", "one").unwrap();
        kv.set("k", "two").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("two"));
        kv.remove("k").unwrap();
        kv.remove("k").unwrap();
        assert_eq!(kv.get("k").unwrap(), None);
        assert_eq!(kv.root(), dir.path());
    }

    #[test]
    fn failed_replace_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory where the blob should go makes the rename fail.
        let blocker = dir.path().join("diceStats-d6.json");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();

        let kv = FileBackend::new(dir.path());
        assert!(kv.set("diceStats-d6", "{}").is_err());
        assert!(!dir.path().join(".diceStats-d6.json.tmp").exists());
    }
}
