//! Tracing subscriber initialization.
//!
//! Logs are written to a file so CLI output stays machine-readable.
//! Focus diagnostics land at `debug`; run with `RUST_LOG=rowfocus=debug`
//! and `tail -f` the log file to follow selection passes.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Where the appender writes: directory plus file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    /// Directory holding the log file. Created if missing.
    pub directory: PathBuf,
    /// Bare file name inside `directory`.
    pub file_name: String,
}

/// Split `log_path` into an appender target and make sure its directory exists.
///
/// A bare file name resolves to the current directory.
pub fn prepare_log_target(log_path: &Path) -> Result<LogTarget, LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?
        .to_string();

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    Ok(LogTarget {
        directory,
        file_name,
    })
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects RUST_LOG environment variable, defaults to "info" level.
///
/// # Errors
/// * `LoggingError::InvalidPath` if `log_path` has no file name
/// * `LoggingError::DirectoryCreation` if the log directory cannot be created
/// * `LoggingError::SubscriberAlreadySet` if a global subscriber exists
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let target = prepare_log_target(log_path)?;
    let file_appender = tracing_appender::rolling::never(&target.directory, &target.file_name);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
