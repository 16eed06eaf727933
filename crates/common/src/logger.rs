use crate::error::SentSearchError;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "sentsearch.log";

/// Initialize logging system
///
/// Console output always goes to stderr so that stdout only carries
/// command results. When `log_dir` is set, a second layer appends to
/// `sentsearch.log` inside it.
///
/// # Arguments
/// * `log_dir` - Optional directory for the log file
/// * `log_level` - Log level (trace, debug, info, warn, error)
pub fn setup_logging(log_dir: Option<&Path>, log_level: &str) -> Result<(), SentSearchError> {
    let file_layer = match log_dir {
        Some(dir) => {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    SentSearchError::config(format!(
                        "Failed to create log directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }

            let log_file_path = dir.join(LOG_FILE_NAME);
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file_path)
                .map_err(|e| {
                    SentSearchError::config(format!(
                        "Failed to open log file {}: {}",
                        log_file_path.display(),
                        e
                    ))
                })?;

            Some(
                fmt::layer()
                    .with_writer(std::sync::Mutex::new(log_file))
                    .with_target(true)
                    .with_line_number(true)
                    .with_ansi(false) // Remove ANSI color codes in files
                    .with_span_events(FmtSpan::CLOSE)
                    .with_filter(build_filter(log_level)),
            )
        }
        None => None,
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(build_filter(log_level));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SentSearchError::config(format!("Failed to install logger: {}", e)))?;

    match log_dir {
        Some(dir) => tracing::debug!(
            "Logging initialized: level={}, log_file={}",
            log_level,
            dir.join(LOG_FILE_NAME).display()
        ),
        None => tracing::debug!("Console logging initialized: level={}", log_level),
    }

    Ok(())
}

/// Environment filter (RUST_LOG env var takes precedence)
fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(parse_log_level(log_level).as_str().to_lowercase()))
}

/// Parse string to tracing Level
pub fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to INFO", level);
            Level::INFO
        }
    }
}
