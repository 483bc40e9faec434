//! Error types for rowfocus.
//!
//! Focus selection itself is total: empty batches, out-of-range percentages and
//! duplicate indices are handled by policy, never by failing. Errors only arise
//! at the boundaries (configuration, logging setup, CLI output).
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the `rowfocus` binary
//!   - [`ConfigError`] - Config file reading, parsing, or validation failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - `serde_json::Error` - JSON output encoding failures
//!   - `std::io::Error` - Writing to stdout failed

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Domain-specific errors convert via `From`, so `?` composes across layers.
///
/// ```
/// use rowfocus::config::ConfigError;
/// use rowfocus::model::error::AppError;
///
/// fn run() -> Result<(), AppError> {
///     load()?;
///     Ok(())
/// }
/// # fn load() -> Result<(), ConfigError> { Ok(()) }
/// # run().unwrap();
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// JSON output could not be encoded.
    #[error("Output encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing output failed (e.g. broken pipe).
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn app_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            field: "threshold",
            reason: "must be within (0, 100]".to_string(),
        };
        let app_err: AppError = config_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("threshold"));
    }

    #[test]
    fn app_error_from_logging_error() {
        let logging_err = LoggingError::InvalidPath(PathBuf::from("/"));
        let app_err: AppError = logging_err.into();
        assert!(app_err.to_string().contains("Logging error"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Output error"));
        assert!(msg.contains("pipe broken"));
    }

    #[test]
    fn app_error_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(app_err.to_string().contains("Output encoding error"));
    }
}
