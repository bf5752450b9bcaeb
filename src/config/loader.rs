//! Configuration file loading with precedence handling.

use crate::layout_mode::Breakpoints;
use crate::view::OutputFormat;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "DPREV_CONFIG";

/// Environment variable overriding the output format.
pub const FORMAT_ENV_VAR: &str = "DPREV_FORMAT";

/// Width assumed when neither the CLI nor the config file gives one.
pub const DEFAULT_WIDTH: u32 = 1024;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/dprev/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Output format ("text" or "json").
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Treat the host as a mobile execution context.
    #[serde(default)]
    pub mobile: Option<bool>,

    /// Viewport width used when `--width` is not given.
    #[serde(default)]
    pub default_width: Option<u32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Layout-mode thresholds.
    #[serde(default)]
    pub breakpoints: Option<BreakpointsSection>,
}

/// Breakpoint overrides from TOML.
///
/// ```toml
/// [breakpoints]
/// permanent_drawer_min_width = 768
/// narrow_max_width = 1024
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BreakpointsSection {
    /// Overrides [`Breakpoints::permanent_drawer_min_width`].
    #[serde(default)]
    pub permanent_drawer_min_width: Option<u32>,
    /// Overrides [`Breakpoints::narrow_max_width`].
    #[serde(default)]
    pub narrow_max_width: Option<u32>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Output format for the render plan.
    pub format: OutputFormat,
    /// Treat the host as a mobile execution context.
    pub mobile: bool,
    /// Viewport width used when `--width` is not given.
    pub default_width: u32,
    /// Layout-mode thresholds.
    pub breakpoints: Breakpoints,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            mobile: false,
            default_width: DEFAULT_WIDTH,
            breakpoints: Breakpoints::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/dprev/dprev.log` on Linux, the platform state
/// directory elsewhere, or `dprev.log` in the current directory when no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("dprev").join("dprev.log")
    } else {
        PathBuf::from("dprev.log")
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
/// Returns `~/.config/dprev/config.toml` on Linux, appropriate path on other platforms.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dprev").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DPREV_CONFIG` environment variable
/// 3. Default path `~/.config/dprev/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `DPREV_CONFIG` is set to a non-UTF-8 value.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let section = config.breakpoints.unwrap_or_default();
    let breakpoints = Breakpoints {
        permanent_drawer_min_width: section
            .permanent_drawer_min_width
            .unwrap_or(defaults.breakpoints.permanent_drawer_min_width),
        narrow_max_width: section
            .narrow_max_width
            .unwrap_or(defaults.breakpoints.narrow_max_width),
    };

    ResolvedConfig {
        format: config.format.unwrap_or(defaults.format),
        mobile: config.mobile.unwrap_or(defaults.mobile),
        default_width: config.default_width.unwrap_or(defaults.default_width),
        breakpoints,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `DPREV_FORMAT`: Override output format (unknown values are ignored)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(format) = std::env::var(FORMAT_ENV_VAR)
        .ok()
        .and_then(|raw| OutputFormat::parse(&raw))
    {
        config.format = format;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    format_override: Option<OutputFormat>,
    mobile_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(format) = format_override {
        config.format = format;
    }

    if let Some(mobile) = mobile_override {
        config.mobile = mobile;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
