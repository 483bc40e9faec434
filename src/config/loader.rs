//! Configuration file loading with precedence handling.

use crate::model::Threshold;
use crate::viewport::{InvalidGeometry, SettleConfig, ViewportGeometry};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ROWFOCUS_CONFIG";

/// Environment variable overriding the focus threshold.
pub const THRESHOLD_ENV_VAR: &str = "ROWFOCUS_THRESHOLD";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but is out of range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Setting name as written in the config file.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/rowfocus/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Focus threshold percentage, `(0, 100]`.
    #[serde(default)]
    pub threshold: Option<f64>,

    /// Height of each row.
    #[serde(default)]
    pub row_height: Option<f64>,

    /// Height of the visible area.
    #[serde(default)]
    pub viewport_height: Option<f64>,

    /// Number of rows in the list.
    #[serde(default)]
    pub row_count: Option<usize>,

    /// Extra scrollable space after the last row.
    #[serde(default)]
    pub bottom_inset: Option<f64>,

    /// Quiescence window before a scroll counts as settled.
    #[serde(default)]
    pub settle_delay_ms: Option<u64>,

    /// Scroll movement below this does not restart the quiescence window.
    #[serde(default)]
    pub settle_epsilon: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args. Every
/// field is already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Focus threshold.
    pub threshold: Threshold,
    /// List geometry.
    pub geometry: ViewportGeometry,
    /// Scroll settle detection.
    pub settle: SettleConfig,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT,
            geometry: ViewportGeometry::default(),
            settle: SettleConfig::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// CLI flags that may override resolved settings. `None` means "not given".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CliOverrides {
    /// `--threshold`
    pub threshold: Option<f64>,
    /// `--row-height`
    pub row_height: Option<f64>,
    /// `--viewport-height`
    pub viewport_height: Option<f64>,
    /// `--rows`
    pub row_count: Option<usize>,
    /// `--bottom-inset`
    pub bottom_inset: Option<f64>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/rowfocus/rowfocus.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("rowfocus").join("rowfocus.log")
    } else {
        PathBuf::from("rowfocus.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/rowfocus/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rowfocus").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ROWFOCUS_CONFIG` environment variable
/// 3. Default path `~/.config/rowfocus/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` when a file value is out of range.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let threshold = match config.threshold {
        Some(value) => threshold_from(value)?,
        None => defaults.threshold,
    };

    let geometry = geometry_from(
        config.row_height.unwrap_or(defaults.geometry.row_height()),
        config
            .viewport_height
            .unwrap_or(defaults.geometry.viewport_height()),
        config.row_count.unwrap_or(defaults.geometry.row_count()),
        config.bottom_inset.unwrap_or(defaults.geometry.bottom_inset()),
    )?;

    let settle = SettleConfig {
        delay: config
            .settle_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.settle.delay),
        epsilon: match config.settle_epsilon {
            Some(value) => epsilon_from(value)?,
            None => defaults.settle.epsilon,
        },
    };

    Ok(ResolvedConfig {
        threshold,
        geometry,
        settle,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ROWFOCUS_THRESHOLD`: Override threshold
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` when the variable is set but is not a
/// valid threshold.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(THRESHOLD_ENV_VAR) {
        let value: f64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            field: "threshold",
            reason: format!("{THRESHOLD_ENV_VAR}={raw:?} is not a number"),
        })?;
        config.threshold = threshold_from(value)?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` when an override is out of range.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(threshold) = overrides.threshold {
        config.threshold = threshold_from(threshold)?;
    }

    let current = config.geometry;
    config.geometry = geometry_from(
        overrides.row_height.unwrap_or(current.row_height()),
        overrides
            .viewport_height
            .unwrap_or(current.viewport_height()),
        overrides.row_count.unwrap_or(current.row_count()),
        overrides.bottom_inset.unwrap_or(current.bottom_inset()),
    )?;

    Ok(config)
}

fn threshold_from(value: f64) -> Result<Threshold, ConfigError> {
    Threshold::new(value).map_err(|e| ConfigError::InvalidValue {
        field: "threshold",
        reason: e.to_string(),
    })
}

fn epsilon_from(value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            field: "settle_epsilon",
            reason: format!("must be non-negative and finite (got {value})"),
        })
    }
}

fn geometry_from(
    row_height: f64,
    viewport_height: f64,
    row_count: usize,
    bottom_inset: f64,
) -> Result<ViewportGeometry, ConfigError> {
    ViewportGeometry::new(row_height, viewport_height, row_count, bottom_inset).map_err(|e| {
        let field = match e {
            InvalidGeometry::RowHeight(_) => "row_height",
            InvalidGeometry::ViewportHeight(_) => "viewport_height",
            InvalidGeometry::BottomInset(_) => "bottom_inset",
        };
        ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
