//! # SchoolNav Store
//!
//! Durable per-subject sidebar overrides, keyed by `(role, email)`.
//!
//! This crate provides:
//! - [`PermissionStore`]: fail-open reads, read-modify-write updates, and
//!   change subscriptions
//! - [`keys`]: Well-known storage keys
//! - [`document`]: The persisted record layouts
//! - [`legacy`]: Import of the flat record written by the old headmaster
//!   management screen
//!
//! # Example
//!
//! ```ignore
//! use schoolnav_core::MemoryStorage;
//! use schoolnav_models::{Email, Role, SidebarConfig};
//! use schoolnav_store::PermissionStore;
//! use std::sync::Arc;
//!
//! let store = PermissionStore::new(Arc::new(MemoryStorage::new()));
//! let subject: Email = "jane@school.test".parse()?;
//!
//! let _subscription = store.subscribe(|change| println!("{} changed", change.subject));
//! store.set(Role::Teacher, &subject, &SidebarConfig::restricted(["/dashboard"]));
//! assert!(store.get(Role::Teacher, &subject).enabled);
//! ```

pub mod document;
pub mod keys;
pub mod legacy;
pub mod store;
pub mod subscription;

pub use document::{LegacyHeadmasterRecord, PermissionDocument};
pub use keys::StorageKeys;
pub use legacy::{ImportPolicy, ImportReport};
pub use store::PermissionStore;
pub use subscription::{PermissionChange, Subscription};
