//! # SchoolNav Core
//!
//! Core types, errors, and utilities shared by the SchoolNav crates.
//!
//! - [`errors`]: Storage error type
//! - [`storage`]: Key-value storage backends (in-memory and local files)
//! - [`serde`]: Lenient serde helpers for persisted records
//!
//! # Example
//!
//! ```ignore
//! use schoolnav_core::storage::{MemoryStorage, StorageBackend};
//!
//! let storage = MemoryStorage::new();
//! storage.write("sidebarPermissions", "{}")?;
//! assert_eq!(storage.read("sidebarPermissions")?.as_deref(), Some("{}"));
//! ```

pub mod errors;
pub mod serde;
pub mod storage;

// Re-export commonly used types at crate root
pub use errors::StorageError;
pub use storage::{LocalFileStorage, MemoryStorage, StorageBackend};
