//! SchoolNav Observability Module
//!
//! Structured logging for SchoolNav binaries:
//! - Compact console output with module targets and source locations
//! - Optional daily-rolling JSON log files for ingestion by log shippers
//!
//! # Examples
//!
//! ```no_run
//! use schoolnav_config::LoggingConfig;
//! use schoolnav_observability::init_logging;
//!
//! init_logging(&LoggingConfig::from_env()).expect("logging");
//! tracing::info!("ready");
//! ```

pub mod logging;

pub use logging::{default_filter_directives, init_logging};
