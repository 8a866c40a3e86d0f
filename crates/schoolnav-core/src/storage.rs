//! Key-value storage abstraction layer.
//!
//! Persisted permission records are opaque strings stored under well-known
//! keys. The [`StorageBackend`] trait lets the permission store run against
//! process memory in tests and against the local filesystem in the CLI
//! without changing its logic.
//!
//! # Example
//!
//! ```ignore
//! use schoolnav_core::storage::{LocalFileStorage, StorageBackend};
//! use std::path::PathBuf;
//!
//! let storage = LocalFileStorage::new(PathBuf::from("./storage/permissions"));
//!
//! storage.write("sidebarPermissions", r#"{"teacher":{}}"#)?;
//! let raw = storage.read("sidebarPermissions")?;
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::errors::StorageError;

/// Abstract trait for record storage backends.
///
/// Implementations can be swapped without changing business logic.
pub trait StorageBackend: Send + Sync {
    /// Read the record stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been written under the key yet.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the record stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with one record.
    pub fn with_record(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut records) = storage.records.write() {
            records.insert(key.into(), value.into());
        }
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let records = self
            .records
            .read()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".into()))?;
        Ok(records.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".into()))?;
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Local filesystem storage, one JSON file per key.
///
/// Writes land in a temporary sibling file that is renamed over the target,
/// so readers never observe a partially written record.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    /// Directory holding one `<key>.json` file per record
    base_dir: PathBuf,
}

impl LocalFileStorage {
    /// Create a new local file storage rooted at `base_dir`.
    ///
    /// The directory is created on first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Validate storage key format to prevent path traversal.
    fn validate_key(key: &str) -> Result<(), StorageError> {
        if key.is_empty() || key.contains("..") {
            return Err(StorageError::InvalidKey(
                "Key must not be empty or contain '..'".to_string(),
            ));
        }

        // Keys map to a single file name: no separators of any kind
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(StorageError::InvalidKey(
                "Key contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        Self::validate_key(key)?;
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

impl StorageBackend for LocalFileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(storage.key = %key, "No record on disk");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.base_dir)?;

        let tmp_path = self.base_dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;

        debug!(storage.key = %key, storage.bytes = value.len(), "Record written");
        Ok(())
    }
}
