//! Navigation access decisions.
//!
//! Two layers apply. The role's catalog is the static policy: a path outside
//! it is never part of that role's navigation. On top of that sits the
//! subject's override, which only narrows anything once it is enabled.

use schoolnav_catalog::Catalog;
use schoolnav_models::{Email, Role, VisibleSection};
use schoolnav_store::PermissionStore;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AccessResolver {
    store: Arc<PermissionStore>,
}

impl AccessResolver {
    pub fn new(store: Arc<PermissionStore>) -> Self {
        Self { store }
    }

    /// Override check only: true unless an enabled override omits `path`.
    pub fn is_allowed(&self, role: Role, subject: &Email, path: &str) -> bool {
        self.store.get(role, subject).is_allowed(path)
    }

    /// Static role policy combined with the subject's override.
    pub fn can_access(&self, role: Role, subject: &Email, path: &str) -> bool {
        if !Catalog::for_role(role).contains(path) {
            debug!(role = %role, path, "Path outside role catalog");
            return false;
        }
        self.is_allowed(role, subject, path)
    }

    /// The role's sidebar after applying the override. Sections with no
    /// remaining items are dropped.
    pub fn visible_sections(&self, role: Role, subject: &Email) -> Vec<VisibleSection> {
        let config = self.store.get(role, subject);

        Catalog::for_role(role)
            .sections()
            .iter()
            .filter_map(|section| {
                let items: Vec<_> = section
                    .items
                    .iter()
                    .filter(|item| config.is_allowed(item.path))
                    .copied()
                    .collect();
                (!items.is_empty()).then_some(VisibleSection {
                    title: section.title,
                    items,
                })
            })
            .collect()
    }

    /// Allowed paths that no longer exist in the role's catalog.
    ///
    /// Resolution ignores them; this only reports them.
    pub fn stale_paths(&self, role: Role, subject: &Email) -> Vec<String> {
        let catalog = Catalog::for_role(role);
        self.store
            .get(role, subject)
            .allowed
            .into_iter()
            .filter(|path| !catalog.contains(path))
            .collect()
    }
}
