//! Sidebar permission editing.
//!
//! Every operation writes straight through to the [`PermissionStore`]; there
//! is no separate save step, so the working config and the stored config
//! never diverge.

use schoolnav_catalog::Catalog;
use schoolnav_models::{Email, NavigationSection, Role, SectionState, SidebarConfig};
use schoolnav_store::PermissionStore;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::model::{ItemView, SectionToggle, SectionView};

/// Flip membership of `path`. Returns `true` if it is now allowed.
pub fn toggle_path(allowed: &mut BTreeSet<String>, path: &str) -> bool {
    if allowed.remove(path) {
        false
    } else {
        allowed.insert(path.to_string());
        true
    }
}

/// Bulk-toggle a section.
///
/// Only a fully checked section is cleared. A partially checked or
/// unchecked section gets its missing paths added; paths already present
/// and paths outside the section are left alone.
pub fn toggle_section_paths(
    allowed: &mut BTreeSet<String>,
    section: &NavigationSection,
) -> SectionToggle {
    let all_checked = section.paths().all(|path| allowed.contains(path));

    if all_checked {
        for path in section.paths() {
            allowed.remove(path);
        }
        SectionToggle::Cleared
    } else {
        for path in section.paths() {
            if !allowed.contains(path) {
                allowed.insert(path.to_string());
            }
        }
        SectionToggle::Filled
    }
}

/// Edits one subject's sidebar override for one role.
pub struct PermissionEditor {
    store: Arc<PermissionStore>,
    catalog: Catalog,
    subject: Email,
    working: SidebarConfig,
    persisted: bool,
}

impl std::fmt::Debug for PermissionEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionEditor")
            .field("catalog", &self.catalog)
            .field("subject", &self.subject)
            .field("working", &self.working)
            .finish_non_exhaustive()
    }
}

impl PermissionEditor {
    /// Opens the editor on `subject` using the role's own catalog.
    pub fn open(store: Arc<PermissionStore>, role: Role, subject: Email) -> Self {
        Self::with_catalog(store, Catalog::for_role(role), subject)
    }

    /// The headmaster management screen: the headmaster role's overrides,
    /// presented through the management catalog.
    pub fn headmaster_management(store: Arc<PermissionStore>, subject: Email) -> Self {
        Self::with_catalog(store, Catalog::HeadmasterManagement, subject)
    }

    pub fn with_catalog(store: Arc<PermissionStore>, catalog: Catalog, subject: Email) -> Self {
        let working = store.get(catalog.role(), &subject);
        Self {
            store,
            catalog,
            subject,
            working,
            persisted: true,
        }
    }

    /// Switch to another role/subject pair and reload its override.
    ///
    /// Staying on the same role keeps the current catalog, so the management
    /// view stays a management view.
    pub fn select_subject(&mut self, role: Role, subject: Email) {
        if self.catalog.role() != role {
            self.catalog = Catalog::for_role(role);
        }
        self.working = self.store.get(role, &subject);
        self.subject = subject;
        self.persisted = true;
    }

    pub fn role(&self) -> Role {
        self.catalog.role()
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    pub fn subject(&self) -> &Email {
        &self.subject
    }

    /// The working override, identical to what was last handed to the store.
    pub fn config(&self) -> &SidebarConfig {
        &self.working
    }

    /// Whether the last write reached storage.
    ///
    /// Failed writes are not errors; the working config still reflects the
    /// edit.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    #[instrument(skip(self), fields(role = %self.role(), subject = %self.subject))]
    pub fn toggle_item(&mut self, path: &str) {
        let now_allowed = toggle_path(&mut self.working.allowed, path);
        debug!(now_allowed, "Item toggled");
        self.persist();
    }

    /// Returns `false`, and changes nothing, when the catalog has no section
    /// titled `title`.
    #[instrument(skip(self), fields(role = %self.role(), subject = %self.subject))]
    pub fn toggle_section(&mut self, title: &str) -> bool {
        let Some(section) = self.catalog.section(title) else {
            debug!("Unknown section");
            return false;
        };

        let outcome = toggle_section_paths(&mut self.working.allowed, section);
        debug!(?outcome, "Section toggled");
        self.persist();
        true
    }

    /// Turn the restriction on or off.
    ///
    /// An empty allow-list is refilled with every catalog path first, so
    /// enabling never hides the whole sidebar.
    #[instrument(skip(self), fields(role = %self.role(), subject = %self.subject))]
    pub fn toggle_enabled(&mut self, enabled: bool) {
        if self.working.allowed.is_empty() {
            self.working.allowed = schoolnav_catalog::all_paths(self.role());
        }
        self.working.enabled = enabled;
        self.persist();
    }

    pub fn section_state(&self, title: &str) -> Option<SectionState> {
        self.catalog
            .section(title)
            .map(|section| self.working.section_state(section))
    }

    pub fn section_states(&self) -> Vec<(&'static str, SectionState)> {
        self.catalog
            .sections()
            .iter()
            .map(|section| (section.title, self.working.section_state(section)))
            .collect()
    }

    /// The full catalog with per-item checkbox state.
    pub fn sections(&self) -> Vec<SectionView> {
        self.catalog
            .sections()
            .iter()
            .map(|section| SectionView {
                title: section.title,
                state: self.working.section_state(section),
                items: section
                    .items
                    .iter()
                    .map(|item| ItemView {
                        item: *item,
                        checked: self.working.allowed.contains(item.path),
                    })
                    .collect(),
            })
            .collect()
    }

    fn persist(&mut self) {
        match self
            .store
            .try_set(self.role(), &self.subject, &self.working)
        {
            Ok(()) => self.persisted = true,
            Err(e) => {
                warn!(
                    role = %self.role(),
                    subject = %self.subject,
                    error = %e,
                    "Sidebar permissions not saved"
                );
                self.persisted = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolnav_models::NavigationItem;

    const ITEMS: &[NavigationItem] = &[
        NavigationItem::new("/a", "A"),
        NavigationItem::new("/b", "B"),
        NavigationItem::new("/c", "C"),
    ];
    const SECTION: NavigationSection = NavigationSection::new("Letters", ITEMS);

    fn set_of(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_toggle_path_flips() {
        let mut allowed = set_of(&["/a"]);
        assert!(!toggle_path(&mut allowed, "/a"));
        assert!(toggle_path(&mut allowed, "/a"));
        assert_eq!(allowed, set_of(&["/a"]));
    }

    #[test]
    fn test_full_section_is_cleared_only_within_section() {
        let mut allowed = set_of(&["/a", "/b", "/c", "/outside"]);
        assert_eq!(toggle_section_paths(&mut allowed, &SECTION), SectionToggle::Cleared);
        assert_eq!(allowed, set_of(&["/outside"]));
    }

    #[test]
    fn test_partial_section_is_filled() {
        let mut allowed = set_of(&["/b", "/outside"]);
        assert_eq!(toggle_section_paths(&mut allowed, &SECTION), SectionToggle::Filled);
        assert_eq!(allowed, set_of(&["/a", "/b", "/c", "/outside"]));
    }

    #[test]
    fn test_empty_section_is_filled() {
        let mut allowed = BTreeSet::new();
        assert_eq!(toggle_section_paths(&mut allowed, &SECTION), SectionToggle::Filled);
        assert_eq!(allowed, set_of(&["/a", "/b", "/c"]));
    }
}
