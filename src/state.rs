use std::sync::Arc;

use schoolnav_config::{StorageBackendKind, StorageConfig};
use schoolnav_core::{LocalFileStorage, MemoryStorage, StorageBackend};
use schoolnav_models::{Email, Role};
use schoolnav_store::{PermissionStore, StorageKeys};
use tracing::info;

use crate::modules::access::AccessResolver;
use crate::modules::permissions::PermissionEditor;

/// Shared application state. The permission store is built once here and
/// handed to editors and resolvers by reference.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<PermissionStore>,
    pub storage_config: StorageConfig,
}

pub fn init_app_state(storage_config: StorageConfig) -> AppState {
    let backend: Arc<dyn StorageBackend> = match storage_config.backend {
        StorageBackendKind::File => {
            info!(dir = %storage_config.storage_dir.display(), "Using file permission storage");
            Arc::new(LocalFileStorage::new(storage_config.storage_dir.clone()))
        }
        StorageBackendKind::Memory => {
            info!("Using in-memory permission storage");
            Arc::new(MemoryStorage::new())
        }
    };

    AppState::with_backend(backend, storage_config)
}

impl AppState {
    pub fn with_backend(backend: Arc<dyn StorageBackend>, storage_config: StorageConfig) -> Self {
        let keys = StorageKeys::from(&storage_config);

        Self {
            store: Arc::new(PermissionStore::with_keys(backend, keys)),
            storage_config,
        }
    }

    pub fn editor(&self, role: Role, subject: Email) -> PermissionEditor {
        PermissionEditor::open(Arc::clone(&self.store), role, subject)
    }

    pub fn headmaster_management(&self, subject: Email) -> PermissionEditor {
        PermissionEditor::headmaster_management(Arc::clone(&self.store), subject)
    }

    pub fn resolver(&self) -> AccessResolver {
        AccessResolver::new(Arc::clone(&self.store))
    }
}
