//! File-backed store
//!
//! Persists the whole map as a JSON object. Every mutation rewrites the file
//! through a temp file and rename so a crash never leaves a torn file.

use super::types::KeyValueStore;
use crate::error::{Error, Result};
use crate::types::StringMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// JSON file key-value store
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Path to the preferences file
    path: PathBuf,
    /// Cached entries
    entries: Arc<RwLock<StringMap>>,
}

impl FileStore {
    /// Open a store at `path`, loading existing entries if the file exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                StringMap::new()
            } else {
                serde_json::from_str(&contents).map_err(|e| Error::Storage {
                    message: format!("Failed to parse preferences file: {e}"),
                })?
            }
        } else {
            StringMap::new()
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "Opened preference store");

        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    /// Get the preferences file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the given entries to disk
    fn persist(&self, entries: &StringMap) -> Result<()> {
        let contents = serde_json::to_string_pretty(entries).map_err(|e| Error::Storage {
            message: format!("Failed to serialize preferences: {e}"),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, &contents)?;
        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| Error::storage("file store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| Error::storage("file store lock poisoned"))?;
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist(&entries) {
            // Keep the cache consistent with what is on disk
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| Error::storage("file store lock poisoned"))?;
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.persist(&entries) {
            entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}
