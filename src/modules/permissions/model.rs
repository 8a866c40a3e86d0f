use schoolnav_models::{NavigationItem, SectionState};
use serde::Serialize;

/// Which way a section toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionToggle {
    /// Every path was allowed, so all of them were removed.
    Cleared,
    /// Some or none were allowed, so the missing ones were added.
    Filled,
}

/// One catalog section as the permission editor presents it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub title: &'static str,
    pub state: SectionState,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub item: NavigationItem,
    pub checked: bool,
}
