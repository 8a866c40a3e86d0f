//! Persisted record layouts.
//!
//! Unified record:
//!
//! ```json
//! { "teacher": { "jane@school.test": { "enabled": true, "allowed": ["/dashboard"] } } }
//! ```
//!
//! Role names are kept as plain strings so entries for roles this build
//! does not know survive a read-modify-write untouched.

use schoolnav_models::{Email, Role, SidebarConfig};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The unified `role -> email -> config` record.
///
/// Only the outer object has to be well formed. Role and subject entries
/// stay raw JSON until they are asked for, so one entry of the wrong shape
/// affects that entry alone and is written back exactly as it was read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionDocument {
    roles: BTreeMap<String, Value>,
}

impl PermissionDocument {
    /// Fails only when the record is not a JSON object.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes one subject's entry. `Some(Err(_))` means the entry exists
    /// but does not have the shape of a [`SidebarConfig`].
    pub fn get(
        &self,
        role: Role,
        subject: &Email,
    ) -> Option<Result<SidebarConfig, serde_json::Error>> {
        self.roles
            .get(role.as_str())
            .and_then(|subjects| subjects.get(subject.as_str()))
            .map(SidebarConfig::deserialize)
    }

    /// Whether the subject has a usable entry for `role`.
    pub fn contains(&self, role: Role, subject: &Email) -> bool {
        matches!(self.get(role, subject), Some(Ok(_)))
    }

    /// Insert or replace one subject's entry, leaving every other entry alone.
    ///
    /// A role value that is not an object cannot hold subjects and is
    /// replaced.
    pub fn insert(
        &mut self,
        role: Role,
        subject: &Email,
        config: &SidebarConfig,
    ) -> Result<(), serde_json::Error> {
        let entry = serde_json::to_value(config)?;
        let subjects = self
            .roles
            .entry(role.as_str().to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        if !subjects.is_object() {
            *subjects = Value::Object(Map::new());
        }
        if let Some(subjects) = subjects.as_object_mut() {
            subjects.insert(subject.as_str().to_string(), entry);
        }
        Ok(())
    }

    /// Subjects with a stored entry for `role`, sorted.
    pub fn subjects(&self, role: Role) -> Vec<String> {
        let mut subjects: Vec<String> = self
            .roles
            .get(role.as_str())
            .and_then(Value::as_object)
            .map(|subjects| subjects.keys().cloned().collect())
            .unwrap_or_default();
        subjects.sort();
        subjects
    }
}

/// The flat `email -> config` record of the old headmaster management screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyHeadmasterRecord {
    pub subjects: BTreeMap<String, SidebarConfig>,
}

impl LegacyHeadmasterRecord {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
