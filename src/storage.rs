//! Durable key-value storage.
//!
//! Pages never touch the filesystem directly. They go through [`Store`], a
//! cheap shared handle over any [`KeyValueStore`] backend. Every read and
//! write through the handle is best-effort: a missing, unreadable or
//! malformed value loads as the default, and a failed write is dropped.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub const KEY_WORKOUT_VIDEO: &str = "dhruv.workout.video";
pub const KEY_WORKOUT_COMPLETED: &str = "dhruv.workout.completed";
pub const KEY_WORKOUT_EXERCISE_DONE: &str = "dhruv.workout.exerciseDone";
pub const KEY_TODOS: &str = "dhruv.todos";
pub const KEY_BOOKS: &str = "dhruv.books";
pub const KEY_PROJECTS: &str = "dhruv.projects";
pub const KEY_THEME: &str = "dhruv.theme";

/// File name of the JSON backend inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence port: string keys to string values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend, used by tests and as the fallback when the data
/// directory cannot be prepared.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file backend: a single object of key to string value.
///
/// The whole file is rewritten on every `set` (temp file + rename), so a
/// crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store in `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(STORAGE_FILE);
        // Bad UTF-8 and bad JSON are both corruption; only real IO errors fail.
        let values = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "storage file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::info!(path = %path.display(), keys = values.len(), "opened storage");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Shared handle to the active backend.
///
/// Cloning shares the backend. A value written through one clone is visible
/// to every other clone on the next read.
#[derive(Clone)]
pub struct Store {
    inner: Rc<RefCell<dyn KeyValueStore>>,
}

impl Store {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self { inner: Rc::new(RefCell::new(backend)) }
    }

    pub fn memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Raw string value, or `None` when absent or unreadable.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match self.inner.borrow().get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(key, error = %e, "storage read failed");
                None
            }
        }
    }

    pub fn set_raw(&self, key: &str, value: &str) {
        if let Err(e) = self.inner.borrow_mut().set(key, value) {
            tracing::debug!(key, error = %e, "storage write failed");
        }
    }

    /// Decode a JSON value, falling back to `T::default()` when the key is
    /// absent, the JSON is malformed, or the shape does not match `T`.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.get_raw(key) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(key, error = %e, "discarding unreadable stored value");
                T::default()
            }
        }
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(text) => self.set_raw(key, &text),
            Err(e) => tracing::debug!(key, error = %e, "could not encode value for storage"),
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

/// Backend whose every operation fails. Stands in for disabled storage.
#[cfg(test)]
pub(crate) struct BrokenStore;

#[cfg(test)]
impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }
}
