//! # SchoolNav Config
//!
//! Configuration types for SchoolNav, loaded from environment variables:
//!
//! - [`storage`]: Where permission records are persisted
//! - [`logging`]: Console and file logging
//!
//! # Example
//!
//! ```ignore
//! use schoolnav_config::{LoggingConfig, StorageConfig};
//!
//! dotenvy::dotenv().ok();
//! let storage_config = StorageConfig::from_env();
//! let logging_config = LoggingConfig::from_env();
//! ```

pub mod logging;
pub mod storage;

// Re-export commonly used types at crate root
pub use logging::LoggingConfig;
pub use storage::{LEGACY_HEADMASTER_KEY, PERMISSIONS_KEY, StorageBackendKind, StorageConfig};
