//! Storage backends.

use crate::KvError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw string storage, the shape of browser local storage.
pub trait KvBackend {
    /// Get the raw value for a key.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Set the raw value for a key.
    fn set(&mut self, key: &str, value: String) -> Result<(), KvError>;

    /// Delete a key. Returns whether it existed.
    fn delete(&mut self, key: &str) -> Result<bool, KvError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all keys.
    fn keys(&self) -> Result<Vec<String>, KvError>;
}

/// In-memory backend, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), KvError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool, KvError> {
        Ok(self.entries.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>, KvError> {
        Ok(self.entries.keys().cloned().collect())
    }
}

/// Backend persisted as a single JSON object file.
///
/// The whole file is rewritten on every write. A missing file reads as an
/// empty store; it is created on first write.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileBackend {
    /// Open (or lazily create) the store file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, KvError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| KvError::OpenError(format!("{}: {}", path.display(), e)))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to disk and keep them only if the write succeeded.
    fn commit(&mut self, entries: BTreeMap<String, String>) -> Result<(), KvError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        self.entries = entries;
        Ok(())
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), KvError> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value);
        self.commit(entries)
    }

    fn delete(&mut self, key: &str) -> Result<bool, KvError> {
        if !self.entries.contains_key(key) {
            return Ok(false);
        }
        let mut entries = self.entries.clone();
        entries.remove(key);
        self.commit(entries)?;
        Ok(true)
    }

    fn keys(&self) -> Result<Vec<String>, KvError> {
        Ok(self.entries.keys().cloned().collect())
    }
}
