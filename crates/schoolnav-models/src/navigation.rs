//! Navigation catalog building blocks.
//!
//! Catalog data is compiled in, so items and sections borrow `'static`
//! strings and are freely copyable.

use serde::Serialize;

/// A single navigable sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NavigationItem {
    pub path: &'static str,
    pub label: &'static str,
}

impl NavigationItem {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }
}

/// A titled group of sidebar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationSection {
    pub title: &'static str,
    pub items: &'static [NavigationItem],
}

impl NavigationSection {
    pub const fn new(title: &'static str, items: &'static [NavigationItem]) -> Self {
        Self { title, items }
    }

    /// Paths of every item in this section, in display order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().map(|item| item.path)
    }
}

/// A section after filtering through a subject's override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleSection {
    pub title: &'static str,
    pub items: Vec<NavigationItem>,
}
