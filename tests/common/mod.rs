#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use schoolnav::state::AppState;
use schoolnav_config::{StorageBackendKind, StorageConfig};
use schoolnav_core::{LocalFileStorage, MemoryStorage, StorageBackend, StorageError};
use schoolnav_models::Email;

/// App state over a fresh in-memory backend.
pub fn memory_state() -> AppState {
    state_with(Arc::new(MemoryStorage::new()))
}

/// App state over an arbitrary backend with default keys.
pub fn state_with(backend: Arc<dyn StorageBackend>) -> AppState {
    let config = StorageConfig {
        backend: StorageBackendKind::Memory,
        ..StorageConfig::default()
    };
    AppState::with_backend(backend, config)
}

/// App state persisting to files under `dir`.
pub fn file_state(dir: &Path) -> AppState {
    let config = StorageConfig {
        backend: StorageBackendKind::File,
        storage_dir: dir.to_path_buf(),
        ..StorageConfig::default()
    };
    AppState::with_backend(Arc::new(LocalFileStorage::new(dir)), config)
}

/// A random, valid subject e-mail.
pub fn fake_subject() -> Email {
    let raw: String = SafeEmail().fake();
    Email::new(raw).expect("faker produced an invalid email")
}

pub fn email(raw: &str) -> Email {
    Email::new(raw).expect("invalid test email")
}

/// Reads from an inner memory backend; every write fails.
#[derive(Default)]
pub struct FailingWrites(pub MemoryStorage);

impl StorageBackend for FailingWrites {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.read(key)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("simulated quota exceeded".into()))
    }
}
