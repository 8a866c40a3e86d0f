//! The permission store.
//!
//! Reads fail open: a missing, unreadable or malformed record yields the
//! default override for the role (restriction off, every catalog path
//! allowed). Writes are a read-modify-write of the whole record so an update
//! for one subject never drops another subject's entry.

use schoolnav_core::{StorageBackend, StorageError};
use schoolnav_models::{Email, Role, SidebarConfig};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, instrument, warn};

use crate::document::PermissionDocument;
use crate::keys::{CHANGE_EVENT, StorageKeys};
use crate::subscription::{PermissionChange, Subscribers, Subscription};

/// Durable map from `(role, email)` to a [`SidebarConfig`].
///
/// Construct once and share by `Arc`.
pub struct PermissionStore {
    backend: Arc<dyn StorageBackend>,
    keys: StorageKeys,
    write_lock: Mutex<()>,
    subscribers: Subscribers,
}

impl std::fmt::Debug for PermissionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionStore")
            .field("keys", &self.keys)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

impl PermissionStore {
    /// Creates a store over `backend` using the default storage keys.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_keys(backend, StorageKeys::default())
    }

    pub fn with_keys(backend: Arc<dyn StorageBackend>, keys: StorageKeys) -> Self {
        Self {
            backend,
            keys,
            write_lock: Mutex::new(()),
            subscribers: Subscribers::default(),
        }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub(crate) fn backend(&self) -> &dyn StorageBackend {
        self.backend.as_ref()
    }

    /// The override used when a subject has none stored.
    pub fn default_config(role: Role) -> SidebarConfig {
        SidebarConfig::open(schoolnav_catalog::all_paths(role))
    }

    /// Returns the stored override, or the fail-open default.
    ///
    /// Never fails: storage errors are logged and answered with the default.
    #[instrument(skip_all, fields(role = %role, subject = %subject))]
    pub fn get(&self, role: Role, subject: &Email) -> SidebarConfig {
        match self.read_document() {
            Ok(document) => match document.get(role, subject) {
                Some(Ok(config)) => {
                    debug!("Stored override found");
                    config
                }
                Some(Err(e)) => {
                    warn!(error = %e, "Stored override malformed, using catalog default");
                    Self::default_config(role)
                }
                None => {
                    debug!("No stored override, using catalog default");
                    Self::default_config(role)
                }
            },
            Err(e) => {
                warn!(error = %e, "Permission record unreadable, using catalog default");
                Self::default_config(role)
            }
        }
    }

    /// Stores `config` for the subject, best effort.
    ///
    /// Failures are logged and swallowed; use [`PermissionStore::try_set`]
    /// to observe them.
    pub fn set(&self, role: Role, subject: &Email, config: &SidebarConfig) {
        if let Err(e) = self.try_set(role, subject, config) {
            warn!(
                role = %role,
                subject = %subject,
                error = %e,
                "Failed to persist sidebar permissions"
            );
        }
    }

    /// Stores `config` for the subject and notifies subscribers on success.
    #[instrument(skip_all, fields(role = %role, subject = %subject))]
    pub fn try_set(
        &self,
        role: Role,
        subject: &Email,
        config: &SidebarConfig,
    ) -> Result<(), StorageError> {
        self.update_document(|document| Ok(document.insert(role, subject, config)?))?;

        info!(
            event = CHANGE_EVENT,
            enabled = config.enabled,
            allowed = config.allowed.len(),
            "Sidebar permissions updated"
        );

        self.subscribers.notify(&PermissionChange {
            role,
            subject: subject.clone(),
        });

        Ok(())
    }

    /// E-mails with a stored override for `role`. Empty when the record is
    /// unreadable.
    pub fn subjects(&self, role: Role) -> Vec<String> {
        match self.read_document() {
            Ok(document) => document.subjects(role),
            Err(e) => {
                warn!(role = %role, error = %e, "Permission record unreadable");
                Vec::new()
            }
        }
    }

    /// Registers `callback` to run after every successful write.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PermissionChange) + Send + Sync + 'static,
    {
        self.subscribers.add(Arc::new(callback))
    }

    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.subscribers.remove(subscription)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn notify(&self, change: &PermissionChange) {
        self.subscribers.notify(change);
    }

    fn read_document(&self) -> Result<PermissionDocument, StorageError> {
        match self.backend.read(&self.keys.permissions)? {
            Some(raw) => Ok(PermissionDocument::parse(&raw)?),
            None => Ok(PermissionDocument::default()),
        }
    }

    /// Read-modify-write of the unified record under the store's write lock.
    ///
    /// A record that is not a JSON object is replaced; an unreadable one
    /// aborts the write so a transient I/O failure cannot wipe good data.
    /// Nothing is written when `mutate` fails.
    pub(crate) fn update_document<F, R>(&self, mutate: F) -> Result<R, StorageError>
    where
        F: FnOnce(&mut PermissionDocument) -> Result<R, StorageError>,
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(StorageError::Serialization(e)) => {
                warn!(error = %e, "Replacing malformed permission record");
                PermissionDocument::default()
            }
            Err(e) => return Err(e),
        };

        let result = mutate(&mut document)?;
        self.backend
            .write(&self.keys.permissions, &document.to_json()?)?;

        Ok(result)
    }
}
