//! JSON-backed named stores.
//!
//! Each store is one flat file under the data directory. Reads fail soft:
//! a missing or unparseable file is treated as empty so a corrupted store
//! never takes the app down. Writes go through a per-store mutex and a
//! temp-file rename, so concurrent read-modify-write cycles within the
//! process cannot overwrite each other's updates.

pub mod continuity;
pub mod leaderboard;
pub mod stats;
pub mod suggestions;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::paths;

/// Store-related errors. Read-side corruption is swallowed by design;
/// these only surface from the write path.
#[derive(Debug)]
pub enum StoreError {
    IoError(String, String),
    SerializeError(String, String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IoError(path, err) => write!(f, "IO error writing {}: {}", path, err),
            StoreError::SerializeError(path, err) => {
                write!(f, "Serialization error for {}: {}", path, err)
            }
        }
    }
}

impl StoreError {
    /// Returns a user-facing error message without exposing filesystem paths.
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::IoError(_, _) => "Failed to save your data",
            StoreError::SerializeError(_, _) => "Failed to encode your data",
        }
    }
}

impl std::error::Error for StoreError {}

/// One named JSON store: a file path plus a mutex serializing
/// read-modify-write cycles.
pub struct JsonStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole store, treating a missing or unreadable file as empty.
    pub fn read_object<T: DeserializeOwned + Default>(&self) -> T {
        self.read_optional().unwrap_or_default()
    }

    /// Read the whole store; None when the file is missing or unreadable.
    pub fn read_optional<T: DeserializeOwned>(&self) -> Option<T> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                // Corrupt store: treated as empty rather than failing the operation
                tracing::warn!("Unparseable store {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Overwrite the whole store atomically (temp file + rename).
    pub fn write_object<T: Serialize>(&self, value: &T) -> Result<(), StoreError> {
        let _guard = self.lock.lock().expect("Store lock poisoned");
        self.write_locked(value)
    }

    /// Locked read-modify-write: load (empty on corruption), apply `f`,
    /// write back atomically. Returns whatever `f` returns.
    pub fn update<T, R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R, StoreError>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        let _guard = self.lock.lock().expect("Store lock poisoned");
        let mut value: T = self.read_optional().unwrap_or_default();
        let result = f(&mut value);
        self.write_locked(&value)?;
        Ok(result)
    }

    /// Append one record as a line of JSON (newline-delimited format).
    pub fn append_line<T: Serialize>(&self, record: &T) -> Result<(), StoreError> {
        let _guard = self.lock.lock().expect("Store lock poisoned");
        self.ensure_parent()?;

        let line = serde_json::to_string(record)
            .map_err(|e| StoreError::SerializeError(self.display_path(), e.to_string()))?;

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::IoError(self.display_path(), e.to_string()))?;

        writeln!(file, "{}", line)
            .map_err(|e| StoreError::IoError(self.display_path(), e.to_string()))
    }

    /// Read all records of a newline-delimited store, skipping corrupt lines.
    pub fn read_lines<T: DeserializeOwned>(&self) -> Vec<T> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Vec::new(),
        };

        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping corrupt line in {}: {}", self.path.display(), e);
                    None
                }
            })
            .collect()
    }

    /// Delete the store file. Missing file is not an error.
    pub fn remove(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().expect("Store lock poisoned");
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::IoError(self.display_path(), e.to_string())),
        }
    }

    fn write_locked<T: Serialize>(&self, value: &T) -> Result<(), StoreError> {
        self.ensure_parent()?;

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::SerializeError(self.display_path(), e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::IoError(self.display_path(), e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StoreError::IoError(self.display_path(), e.to_string()))
    }

    fn ensure_parent(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::IoError(self.display_path(), e.to_string()))?;
            }
        }
        Ok(())
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// All named stores the app persists to.
#[derive(Clone)]
pub struct Stores {
    pub stats: Arc<JsonStore>,
    pub leaderboard: Arc<JsonStore>,
    pub suggestions: Arc<JsonStore>,
    pub continuity: Arc<JsonStore>,
}

impl Stores {
    /// Stores at their configured locations under the data directory.
    pub fn from_paths() -> Self {
        Self {
            stats: Arc::new(JsonStore::new(paths::user_stats_path())),
            leaderboard: Arc::new(JsonStore::new(paths::leaderboard_path())),
            suggestions: Arc::new(JsonStore::new(paths::suggestions_path())),
            continuity: Arc::new(JsonStore::new(paths::continuity_path())),
        }
    }

    /// Stores rooted at an arbitrary directory (tests, alternate instances).
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            stats: Arc::new(JsonStore::new(dir.join("user_stats.json"))),
            leaderboard: Arc::new(JsonStore::new(dir.join("leaderboard.json"))),
            suggestions: Arc::new(JsonStore::new(dir.join("suggestions.json"))),
            continuity: Arc::new(JsonStore::new(dir.join("user_session.json"))),
        }
    }
}
