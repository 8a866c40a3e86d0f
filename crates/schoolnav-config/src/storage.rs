//! Permission storage configuration.

use std::env;
use std::path::PathBuf;

/// Default key of the unified `role -> email -> config` record.
pub const PERMISSIONS_KEY: &str = "sidebarPermissions";

/// Default key of the flat `email -> config` record written by the old
/// headmaster management screen.
pub const LEGACY_HEADMASTER_KEY: &str = "headmasterSidebarPermissions";

/// Which storage backend holds the permission records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackendKind {
    /// One JSON file per record under [`StorageConfig::storage_dir`].
    File,
    /// Process memory only; nothing survives a restart.
    Memory,
}

/// Permission storage configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SCHOOLNAV_STORAGE_BACKEND`: `file` or `memory` (default: `file`)
/// - `SCHOOLNAV_STORAGE_DIR`: Directory for file records (default: `storage/permissions`)
/// - `SCHOOLNAV_PERMISSIONS_KEY`: Key of the unified record (default: `sidebarPermissions`)
/// - `SCHOOLNAV_LEGACY_HEADMASTER_KEY`: Key of the flat headmaster record
///   written by the old management screen (default: `headmasterSidebarPermissions`)
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub backend: StorageBackendKind,
    pub storage_dir: PathBuf,
    pub permissions_key: String,
    pub legacy_headmaster_key: String,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let backend = match lookup("SCHOOLNAV_STORAGE_BACKEND")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            Some("memory") => StorageBackendKind::Memory,
            _ => StorageBackendKind::File,
        };

        Self {
            backend,
            storage_dir: lookup("SCHOOLNAV_STORAGE_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            permissions_key: lookup("SCHOOLNAV_PERMISSIONS_KEY")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.permissions_key),
            legacy_headmaster_key: lookup("SCHOOLNAV_LEGACY_HEADMASTER_KEY")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.legacy_headmaster_key),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendKind::File,
            storage_dir: PathBuf::from("storage/permissions"),
            permissions_key: PERMISSIONS_KEY.into(),
            legacy_headmaster_key: LEGACY_HEADMASTER_KEY.into(),
        }
    }
}
