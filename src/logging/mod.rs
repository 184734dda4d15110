//! Structured logging setup using tracing
//!
//! Console output is always on; a rotating JSON file layer can be enabled
//! through [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::domain::{PlainsightError, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Guard that must be kept alive for the duration of the program
/// to ensure file logs are flushed properly
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }
}

/// Initialize the logging system
///
/// # Arguments
///
/// * `log_level_str` - Log level as a string (trace, debug, info, warn, error)
/// * `config` - Logging configuration
///
/// # Returns
///
/// A [`LoggingGuard`] that must be kept alive for the duration of the
/// program.
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("plainsight={log_level}")));

    let mut layers = Vec::new();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(env_filter)
        .boxed();
    layers.push(console_layer);

    let file_guard = if config.file_enabled {
        std::fs::create_dir_all(&config.file_dir).map_err(|e| {
            PlainsightError::Configuration(format!(
                "failed to create log directory {}: {e}",
                config.file_dir
            ))
        })?;

        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.file_dir, "plainsight.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("plainsight={log_level}")));
        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_filter(file_filter)
            .boxed();

        layers.push(file_layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry().with(layers).init();

    tracing::debug!(
        file_enabled = config.file_enabled,
        file_dir = %config.file_dir,
        "logging initialized"
    );

    Ok(LoggingGuard::new(file_guard))
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(PlainsightError::Configuration(format!(
            "invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
