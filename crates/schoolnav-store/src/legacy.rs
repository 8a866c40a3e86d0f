//! Import of the flat headmaster record.
//!
//! The old headmaster management screen kept its own `email -> config`
//! record under a separate key, so edits made there never reached the
//! unified store. Importing copies those entries under the `headmaster`
//! role. The legacy record is read only; it is never modified or removed.

use schoolnav_core::StorageError;
use schoolnav_models::{Email, Role};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::document::LegacyHeadmasterRecord;
use crate::store::PermissionStore;
use crate::subscription::PermissionChange;

/// What to do when a subject already has a unified headmaster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportPolicy {
    /// Leave the unified entry as it is.
    #[default]
    KeepExisting,
    /// Replace the unified entry with the legacy one.
    Overwrite,
}

/// Outcome of [`PermissionStore::import_legacy_headmaster`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Subjects copied into the unified record.
    pub imported: usize,
    /// Subjects left alone because a unified entry already existed.
    pub skipped: usize,
    /// Legacy keys that are not valid e-mail addresses.
    pub invalid: Vec<String>,
}

impl PermissionStore {
    /// Reads the legacy headmaster record without touching the unified one.
    ///
    /// Returns an empty record when the key was never written.
    pub fn load_legacy_headmaster(&self) -> Result<LegacyHeadmasterRecord, StorageError> {
        match self.backend().read(&self.keys().legacy_headmaster)? {
            Some(raw) => Ok(LegacyHeadmasterRecord::parse(&raw)?),
            None => Ok(LegacyHeadmasterRecord::default()),
        }
    }

    /// Copies legacy headmaster overrides into the unified record.
    ///
    /// All accepted entries are written in one update; subscribers are told
    /// about each imported subject afterwards.
    #[instrument(skip(self))]
    pub fn import_legacy_headmaster(
        &self,
        policy: ImportPolicy,
    ) -> Result<ImportReport, StorageError> {
        let legacy = self.load_legacy_headmaster()?;
        if legacy.subjects.is_empty() {
            info!("No legacy headmaster record to import");
            return Ok(ImportReport::default());
        }

        let mut report = ImportReport::default();
        let mut changes = Vec::new();

        self.update_document(|document| {
            for (raw_email, config) in legacy.subjects {
                let subject = match Email::new(raw_email.as_str()) {
                    Ok(subject) => subject,
                    Err(e) => {
                        warn!(key = %raw_email, error = %e, "Skipping legacy entry");
                        report.invalid.push(raw_email);
                        continue;
                    }
                };

                if policy == ImportPolicy::KeepExisting
                    && document.contains(Role::Headmaster, &subject)
                {
                    report.skipped += 1;
                    continue;
                }

                document.insert(Role::Headmaster, &subject, &config)?;
                report.imported += 1;
                changes.push(PermissionChange {
                    role: Role::Headmaster,
                    subject,
                });
            }
            Ok(())
        })?;

        info!(
            imported = report.imported,
            skipped = report.skipped,
            invalid = report.invalid.len(),
            "Legacy headmaster permissions imported"
        );

        for change in &changes {
            self.notify(change);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolnav_core::{MemoryStorage, StorageBackend};
    use schoolnav_models::SidebarConfig;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const LEGACY: &str = r#"{
        "head@school.test": { "enabled": true, "allowed": ["/dashboard"] },
        "deputy@school.test": { "enabled": false, "allowed": [] },
        "not an email": { "enabled": true, "allowed": ["/users"] }
    }"#;

    fn store_with_legacy() -> (Arc<MemoryStorage>, PermissionStore) {
        let backend = Arc::new(MemoryStorage::with_record("headmasterSidebarPermissions", LEGACY));
        let store = PermissionStore::new(backend.clone());
        (backend, store)
    }

    fn email(raw: &str) -> Email {
        Email::new(raw).unwrap()
    }

    #[test]
    fn test_import_without_legacy_record() {
        let store = PermissionStore::new(Arc::new(MemoryStorage::new()));
        let report = store.import_legacy_headmaster(ImportPolicy::Overwrite).unwrap();
        assert_eq!(report, ImportReport::default());
    }

    #[test]
    fn test_import_copies_valid_entries() {
        let (backend, store) = store_with_legacy();
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);
        let _subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let report = store.import_legacy_headmaster(ImportPolicy::KeepExisting).unwrap();

        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.invalid, vec!["not an email".to_string()]);
        assert_eq!(notified.load(Ordering::SeqCst), 2);
        assert_eq!(
            store.get(Role::Headmaster, &email("head@school.test")),
            SidebarConfig::restricted(["/dashboard"])
        );
        // Legacy record untouched
        assert_eq!(
            backend.read("headmasterSidebarPermissions").unwrap().as_deref(),
            Some(LEGACY)
        );
    }

    #[test]
    fn test_keep_existing_skips_present_subjects() {
        let (_backend, store) = store_with_legacy();
        let head = email("head@school.test");
        store.set(Role::Headmaster, &head, &SidebarConfig::restricted(["/settings"]));

        let report = store.import_legacy_headmaster(ImportPolicy::KeepExisting).unwrap();

        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            store.get(Role::Headmaster, &head),
            SidebarConfig::restricted(["/settings"])
        );
    }

    #[test]
    fn test_overwrite_replaces_present_subjects() {
        let (_backend, store) = store_with_legacy();
        let head = email("head@school.test");
        store.set(Role::Headmaster, &head, &SidebarConfig::restricted(["/settings"]));

        let report = store.import_legacy_headmaster(ImportPolicy::Overwrite).unwrap();

        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(
            store.get(Role::Headmaster, &head),
            SidebarConfig::restricted(["/dashboard"])
        );
    }

    #[test]
    fn test_malformed_legacy_record_is_error() {
        let backend = Arc::new(MemoryStorage::with_record("headmasterSidebarPermissions", "[]"));
        let store = PermissionStore::new(backend);
        assert!(matches!(
            store.import_legacy_headmaster(ImportPolicy::KeepExisting),
            Err(StorageError::Serialization(_))
        ));
    }
}
