//! The fixed set of user roles that own a navigation catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User category that determines which navigation catalog applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Headmaster,
    Teacher,
    Parent,
}

impl Role {
    /// Every role, in sidebar display order.
    pub const ALL: [Role; 3] = [Role::Headmaster, Role::Teacher, Role::Parent];

    /// Stable lowercase name used in persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Headmaster => "headmaster",
            Role::Teacher => "teacher",
            Role::Parent => "parent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a role name is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleParseError(pub String);

impl std::error::Error for RoleParseError {}

impl fmt::Display for RoleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown role '{}'. Expected one of: headmaster, teacher, parent",
            self.0
        )
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "headmaster" => Ok(Role::Headmaster),
            "teacher" => Ok(Role::Teacher),
            "parent" => Ok(Role::Parent),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_case_insensitive() {
        assert_eq!("Headmaster".parse::<Role>().unwrap(), Role::Headmaster);
        assert_eq!(" teacher ".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!("PARENT".parse::<Role>().unwrap(), Role::Parent);
    }

    #[test]
    fn test_role_parse_unknown() {
        let err = "student".parse::<Role>().unwrap_err();
        assert_eq!(err, RoleParseError("student".into()));
        assert!(err.to_string().contains("student"));
    }

    #[test]
    fn test_role_names_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
            assert_eq!(
                serde_json::to_string(&role).unwrap(),
                format!("\"{}\"", role.as_str())
            );
        }
    }
}
