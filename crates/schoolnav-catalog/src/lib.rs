//! # SchoolNav Catalog
//!
//! The static, compiled-in tree of sidebar sections each role can be shown
//! before any per-subject override is applied.
//!
//! # Example
//!
//! ```ignore
//! use schoolnav_catalog::{Catalog, all_paths, sections_for};
//! use schoolnav_models::Role;
//!
//! for section in sections_for(Role::Teacher) {
//!     println!("{} ({} items)", section.title, section.items.len());
//! }
//!
//! assert!(all_paths(Role::Teacher).contains("/attendance/students"));
//! assert!(Catalog::HeadmasterManagement.section("Administration").is_none());
//! ```

mod data;

use schoolnav_models::{NavigationItem, NavigationSection, Role};
use std::collections::BTreeSet;

/// One of the compiled-in navigation catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Headmaster,
    Teacher,
    Parent,
    /// The near-identical catalog used by the standalone headmaster
    /// management screen. Its paths are a subset of [`Catalog::Headmaster`].
    HeadmasterManagement,
}

impl Catalog {
    /// The catalog a role's sidebar is built from.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Headmaster => Catalog::Headmaster,
            Role::Teacher => Catalog::Teacher,
            Role::Parent => Catalog::Parent,
        }
    }

    /// The role whose overrides this catalog edits.
    pub fn role(&self) -> Role {
        match self {
            Catalog::Headmaster | Catalog::HeadmasterManagement => Role::Headmaster,
            Catalog::Teacher => Role::Teacher,
            Catalog::Parent => Role::Parent,
        }
    }

    pub fn sections(&self) -> &'static [NavigationSection] {
        match self {
            Catalog::Headmaster => data::HEADMASTER,
            Catalog::Teacher => data::TEACHER,
            Catalog::Parent => data::PARENT,
            Catalog::HeadmasterManagement => data::HEADMASTER_MANAGEMENT,
        }
    }

    /// Look up a section by its exact title.
    pub fn section(&self, title: &str) -> Option<&'static NavigationSection> {
        self.sections().iter().find(|section| section.title == title)
    }

    /// Every item across all sections, in display order.
    pub fn items(&self) -> impl Iterator<Item = &'static NavigationItem> {
        self.sections().iter().flat_map(|section| section.items.iter())
    }

    /// Flattened set of every path in the catalog.
    pub fn all_paths(&self) -> BTreeSet<String> {
        self.items().map(|item| item.path.to_string()).collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.items().any(|item| item.path == path)
    }
}

/// Sections shown to `role`, in display order.
pub fn sections_for(role: Role) -> &'static [NavigationSection] {
    Catalog::for_role(role).sections()
}

/// Every path in `role`'s catalog; the default "everything visible" list.
pub fn all_paths(role: Role) -> BTreeSet<String> {
    Catalog::for_role(role).all_paths()
}
