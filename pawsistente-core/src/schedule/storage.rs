//! Key-value backends the schedule state is persisted to.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{PawsError, PawsResult};

/// Durable key-value storage for serialized state.
pub trait StateStorage {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> PawsResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> PawsResult<()>;
    fn remove(&mut self, key: &str) -> PawsResult<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PawsResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(PawsError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl StateStorage for FileStorage {
    fn read(&self, key: &str) -> PawsResult<Option<String>> {
        let path = self.path(key)?;

        if path.exists() {
            Ok(Some(std::fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }

    fn write(&mut self, key: &str, value: &str) -> PawsResult<()> {
        let path = self.path(key)?;
        std::fs::create_dir_all(&self.dir)?;

        // Sibling temp file, then rename over the snapshot
        let temp = path.with_extension("json.tmp");
        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PawsResult<()> {
        let path = self.path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process storage, for tests and sessions that should not touch disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn read(&self, key: &str) -> PawsResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> PawsResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PawsResult<()> {
        self.items.remove(key);
        Ok(())
    }
}
