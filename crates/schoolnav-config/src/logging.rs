//! Logging configuration.

use std::env;
use std::path::PathBuf;

/// Logging configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `LOG_LEVEL`: Default level for SchoolNav crates (default: `info`)
/// - `LOG_DIR`: Directory for daily-rolling JSON logs (default: unset, console only)
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: lookup("LOG_LEVEL")
                .map(|v| v.trim().to_ascii_lowercase())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "info".to_string()),
            log_dir: lookup("LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}
