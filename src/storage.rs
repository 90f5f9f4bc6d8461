//! Durable key/value storage.
//!
//! A tiny string-to-string store persisted as one JSON object on disk. It
//! holds exactly two values: the snake high score and the language
//! preference. Every `set` writes the whole file immediately.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// Storage key of the snake high score (plain decimal integer).
pub const HIGH_SCORE_KEY: &str = "snakeHigh";

/// Storage key of the language preference (`"en"` or `"fi"`).
pub const LANGUAGE_KEY: &str = "portfolio-language";

/// File name of the store inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize storage: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Shared handle to the store. Clones refer to the same values.
#[derive(Debug, Clone)]
pub struct Storage {
    inner: Arc<StorageInner>,
}

#[derive(Debug)]
struct StorageInner {
    /// Backing file; `None` keeps values in memory only
    path: Option<PathBuf>,
    values: Mutex<BTreeMap<String, String>>,
}

impl Storage {
    /// Open the store in `data_dir`, creating nothing until the first write.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// logged and treated as empty as well; the next write replaces it.
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(STORAGE_FILE);
        let values = read_values(&path);
        debug!("Opened storage at {} ({} values)", path.display(), values.len());

        Self {
            inner: Arc::new(StorageInner {
                path: Some(path),
                values: Mutex::new(values),
            }),
        }
    }

    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(StorageInner {
                path: None,
                values: Mutex::new(BTreeMap::new()),
            }),
        }
    }

    /// Location of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.inner.path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    /// Store a value and persist the whole store.
    ///
    /// The in-memory value is updated even when the write fails, so the
    /// running session stays consistent.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let snapshot = {
            let mut values = self.values();
            values.insert(key.to_string(), value.to_string());
            values.clone()
        };
        self.persist(&snapshot)
    }

    /// Stored high score, `0` when absent or unparsable.
    pub fn high_score(&self) -> u32 {
        self.get(HIGH_SCORE_KEY)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Raise the stored high score to `max(stored, score)` and return it.
    ///
    /// Persistence failures are logged; the returned value is the new high
    /// score regardless.
    pub fn record_score(&self, score: u32) -> u32 {
        let high = self.high_score().max(score);
        if let Err(e) = self.set(HIGH_SCORE_KEY, &high.to_string()) {
            warn!("Failed to persist high score {}: {}", high, e);
        }
        high
    }

    fn values(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        // The map is always left consistent, so a poisoned lock is still usable
        self.inner.values.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let Some(path) = &self.inner.path else {
            return Ok(());
        };

        let serialized = serde_json::to_string_pretty(values)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, serialized).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;

        debug!("Persisted {} values to {}", values.len(), path.display());
        Ok(())
    }
}

/// Read the store file. Non-string values are kept in their JSON text form.
fn read_values(path: &Path) -> BTreeMap<String, String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            warn!("Failed to read storage {}: {}", path.display(), e);
            return BTreeMap::new();
        }
    };

    match serde_json::from_str::<BTreeMap<String, Value>>(&raw) {
        Ok(map) => map
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect(),
        Err(e) => {
            warn!("Ignoring corrupt storage {}: {}", path.display(), e);
            BTreeMap::new()
        }
    }
}
