//! Key-Value Storage Backends
//!
//! All durable state lives under fixed string keys: the participant list,
//! the winner ledger, and the admin session flag. Backends expose single-key
//! reads and writes plus `apply`, which commits a batch of staged writes as
//! one unit so a draw can land its ledger append and status flip together.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use lj_core::{LjError, LjResult};

// ============ Storage Keys ============

/// Storage key for the participant collection
pub const KEY_PARTICIPANTS: &str = "participants";

/// Storage key for the winner ledger
pub const KEY_WINNERS: &str = "winners";

/// Storage key for the admin session flag
pub const KEY_ADMIN_LOGGED_IN: &str = "adminLoggedIn";

// ============ Backend Trait ============

/// A write staged for an atomic commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedWrite {
    pub key: String,
    pub value: String,
}

/// Key-value storage abstraction
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under a key
    fn get(&self, key: &str) -> Option<String>;

    /// Write a single key
    fn set(&self, key: &str, value: &str) -> LjResult<()>;

    /// Remove a key
    fn remove(&self, key: &str) -> LjResult<()>;

    /// Commit several writes as one unit; either all land or none do
    fn apply(&self, writes: &[StagedWrite]) -> LjResult<()>;
}

/// Shared backend handle
pub type SharedBackend = Arc<dyn StorageBackend>;

// ============ Memory Backend ============

/// In-memory backend for tests and ephemeral hosts
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh backend in a shared handle
    pub fn shared() -> SharedBackend {
        Arc::new(Self::new())
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> LjResult<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> LjResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }

    fn apply(&self, writes: &[StagedWrite]) -> LjResult<()> {
        let mut entries = self.entries.lock();
        for write in writes {
            entries.insert(write.key.clone(), write.value.clone());
        }
        Ok(())
    }
}

// ============ JSON File Backend ============

/// On-disk backend: the whole key-value map stored as one JSON file
///
/// The map is loaded once at open. A missing file starts empty; a malformed
/// file is discarded with a warning and also starts empty. Every mutation
/// rewrites the file through a sibling temp file and rename, so a failed
/// write leaves both the file and the in-memory map unchanged.
pub struct JsonFileBackend {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileBackend {
    /// Open a backend at the given path, loading any existing state
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!(
                        "Discarding corrupt storage file {}: {}",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Open at the default per-user location
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// Wrap in a shared handle
    pub fn shared<P: AsRef<Path>>(path: P) -> SharedBackend {
        Arc::new(Self::open(path))
    }

    /// Get default storage file path
    pub fn default_path() -> PathBuf {
        let base = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .map(|h| h.join("Library/Application Support/Lucky Jewels"))
                .unwrap_or_else(|| PathBuf::from("."))
        } else if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .map(|d| d.join("Lucky Jewels"))
                .unwrap_or_else(|| PathBuf::from("."))
        } else {
            // Linux/other
            dirs::config_dir()
                .map(|d| d.join("lucky-jewels"))
                .unwrap_or_else(|| PathBuf::from("."))
        };
        base.join("draw-state.json")
    }

    fn persist(&self, entries: &HashMap<String, String>) -> LjResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| LjError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StorageBackend for JsonFileBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> LjResult<()> {
        let mut entries = self.entries.lock();
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> LjResult<()> {
        let mut entries = self.entries.lock();
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn apply(&self, writes: &[StagedWrite]) -> LjResult<()> {
        let mut entries = self.entries.lock();
        let mut next = entries.clone();
        for write in writes {
            next.insert(write.key.clone(), write.value.clone());
        }
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();

        assert_eq!(backend.get("missing"), None);

        backend.set("a", "1").unwrap();
        assert_eq!(backend.get("a").as_deref(), Some("1"));

        backend.remove("a").unwrap();
        assert_eq!(backend.get("a"), None);
    }

    #[test]
    fn test_memory_backend_apply() {
        let backend = MemoryBackend::new();

        let writes = vec![
            StagedWrite {
                key: "a".to_string(),
                value: "1".to_string(),
            },
            StagedWrite {
                key: "b".to_string(),
                value: "2".to_string(),
            },
        ];
        backend.apply(&writes).unwrap();

        assert_eq!(backend.get("a").as_deref(), Some("1"));
        assert_eq!(backend.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_file_backend_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::open(dir.path().join("state.json"));

        assert_eq!(backend.get(KEY_PARTICIPANTS), None);
    }

    #[test]
    fn test_file_backend_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        {
            let backend = JsonFileBackend::open(&path);
            backend.set("a", "1").unwrap();
        }

        let reopened = JsonFileBackend::open(&path);
        assert_eq!(reopened.get("a").as_deref(), Some("1"));
    }

    #[test]
    fn test_file_backend_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not valid json").unwrap();

        let backend = JsonFileBackend::open(&path);
        assert_eq!(backend.get("a"), None);

        // A write replaces the corrupt file with valid state
        backend.set("a", "1").unwrap();
        let reopened = JsonFileBackend::open(&path);
        assert_eq!(reopened.get("a").as_deref(), Some("1"));
    }

    #[test]
    fn test_file_backend_apply_persists_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let backend = JsonFileBackend::open(&path);
        let writes = vec![
            StagedWrite {
                key: KEY_PARTICIPANTS.to_string(),
                value: "[]".to_string(),
            },
            StagedWrite {
                key: KEY_WINNERS.to_string(),
                value: "[]".to_string(),
            },
        ];
        backend.apply(&writes).unwrap();

        let reopened = JsonFileBackend::open(&path);
        assert_eq!(reopened.get(KEY_PARTICIPANTS).as_deref(), Some("[]"));
        assert_eq!(reopened.get(KEY_WINNERS).as_deref(), Some("[]"));

        // No temp file left behind
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_backend_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/state.json");

        let backend = JsonFileBackend::open(&path);
        backend.set("a", "1").unwrap();

        assert!(path.exists());
    }
}
