//! # SchoolNav Models
//!
//! Domain models for the navigation permission model.
//!
//! # Modules
//!
//! - [`navigation`]: Catalog items and sections
//! - [`roles`]: The fixed set of user roles
//! - [`sidebar`]: Per-subject sidebar overrides and derived section state
//! - [`value_types`]: Validated primitives (subject e-mail)
//!
//! # Example
//!
//! ```ignore
//! use schoolnav_models::{Email, Role, SidebarConfig};
//!
//! let role: Role = "teacher".parse()?;
//! let subject: Email = "jane@school.test".parse()?;
//! let config = SidebarConfig::restricted(["/attendance/students"]);
//! assert!(config.is_allowed("/attendance/students"));
//! ```

pub mod navigation;
pub mod roles;
pub mod sidebar;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use navigation::{NavigationItem, NavigationSection, VisibleSection};
pub use roles::{Role, RoleParseError};
pub use sidebar::{SectionState, SidebarConfig};
pub use value_types::{Email, ValueTypeError};
