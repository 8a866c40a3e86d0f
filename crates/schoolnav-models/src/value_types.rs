//! Strongly-typed value types with validation for domain primitives.
//!
//! Subjects whose sidebar can be overridden are identified by e-mail. The
//! [`Email`] newtype guarantees the identity is a valid address before it
//! reaches the permission store.
//!
//! # Example
//!
//! ```ignore
//! use schoolnav_models::value_types::Email;
//!
//! let email: Email = "head@school.test".parse().unwrap();
//! println!("Subject: {}", email);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::ValidateEmail;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    /// The email address is invalid.
    InvalidEmail(String),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
        }
    }
}

// ============================================================================
// Email
// ============================================================================

/// A validated email address.
///
/// This type guarantees that the contained string is a valid email address
/// according to the validator crate's email validation rules.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Email(String);

impl Email {
    /// Create a new Email from a string, validating it.
    ///
    /// Surrounding whitespace is trimmed before validation.
    pub fn new(email: impl Into<String>) -> Result<Self, ValueTypeError> {
        let email = email.into();
        let trimmed = email.trim();
        Self::validate(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Get the email as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(email: &str) -> Result<(), ValueTypeError> {
        if email.is_empty() {
            return Err(ValueTypeError::InvalidEmail("email cannot be empty".into()));
        }

        if !email.validate_email() {
            return Err(ValueTypeError::InvalidEmail(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde Deserialize with validation
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
