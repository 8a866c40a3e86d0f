use anyhow::Context;
use schoolnav_config::LoggingConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// SchoolNav crates whose events are enabled at the configured level.
const SCHOOLNAV_TARGETS: &[&str] = &[
    "schoolnav",
    "schoolnav_core",
    "schoolnav_catalog",
    "schoolnav_store",
];

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_filter_directives(level: &str) -> String {
    SCHOOLNAV_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize console logging and, when `log_dir` is configured, a JSON file layer.
///
/// # Configuration
///
/// - **Log Level**: `RUST_LOG` wins when set; otherwise `LOG_LEVEL` applies
///   to the SchoolNav crates only
/// - **Console**: compact format, ANSI colors, module targets
/// - **File**: `<log_dir>/schoolnav.json`, rotated daily, always at `info`
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directives(&config.level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    match &config.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)
                .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

            // JSON file layer for structured logs
            let json_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "schoolnav.json");
            let json_layer = fmt::layer()
                .json()
                .with_writer(json_appender)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(EnvFilter::new(default_filter_directives("info")));

            tracing_subscriber::registry()
                .with(console_layer)
                .with(json_layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        None => {
            tracing_subscriber::registry()
                .with(console_layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
    }

    Ok(())
}
