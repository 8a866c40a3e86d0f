//! Well-known storage keys.

use schoolnav_config::StorageConfig;

pub use schoolnav_config::{LEGACY_HEADMASTER_KEY, PERMISSIONS_KEY};

/// Event name attached to every successful write in the logs.
pub const CHANGE_EVENT: &str = "sidebar-permissions-updated";

/// Keys a [`crate::PermissionStore`] reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub permissions: String,
    pub legacy_headmaster: String,
}

impl StorageKeys {
    pub fn new(permissions: impl Into<String>, legacy_headmaster: impl Into<String>) -> Self {
        Self {
            permissions: permissions.into(),
            legacy_headmaster: legacy_headmaster.into(),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(PERMISSIONS_KEY, LEGACY_HEADMASTER_KEY)
    }
}

impl From<&StorageConfig> for StorageKeys {
    fn from(config: &StorageConfig) -> Self {
        Self::new(
            config.permissions_key.clone(),
            config.legacy_headmaster_key.clone(),
        )
    }
}
