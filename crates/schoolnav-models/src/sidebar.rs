//! Per-subject sidebar overrides.

use schoolnav_core::serde::deserialize_path_set;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::navigation::NavigationSection;

/// One subject's override of a role's navigation.
///
/// While `enabled` is false the override is dormant and every catalog path
/// stays reachable; `allowed` is only consulted once it is switched on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, deserialize_with = "deserialize_path_set")]
    pub allowed: BTreeSet<String>,
}

impl SidebarConfig {
    /// The fail-open default: restriction off, every given path allowed.
    pub fn open<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: false,
            allowed: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// An enabled override allowing exactly the given paths.
    pub fn restricted<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            allowed: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether navigation to `path` is permitted under this override.
    pub fn is_allowed(&self, path: &str) -> bool {
        !self.enabled || self.allowed.contains(path)
    }

    /// Tri-state of a section's checkbox, derived from `allowed`.
    pub fn section_state(&self, section: &NavigationSection) -> SectionState {
        let total = section.items.len();
        let selected = section
            .paths()
            .filter(|path| self.allowed.contains(*path))
            .count();

        match selected {
            0 => SectionState::Unchecked,
            n if n == total => SectionState::Checked,
            _ => SectionState::Indeterminate,
        }
    }
}

/// Checkbox state of a section against an allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionState {
    Checked,
    Unchecked,
    Indeterminate,
}
