//! Configuration loader
//!
//! Loads client configuration from environment variables or a TOML file.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required variables are missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//!
//! ## Environment Variables
//! - `TAPVERSE_API_BASE_URL`: Service base URL, ending in `/api` (required)
//! - `TAPVERSE_API_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `TAPVERSE_POLL_INTERVAL_SECS`: Seconds between job status checks
//! - `TAPVERSE_POLL_MAX_FAILURES`: Consecutive failed checks before giving up
//! - `TAPVERSE_POLL_MAX_DURATION_SECS`: Wall-clock cap on one job poll
//! - `TAPVERSE_SESSION_FILE`: Path for on-disk session persistence
//!
//! Only the base URL is required; the rest default per
//! [`tapverse_domain::Config::default`].
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./tapverse.toml` or `./config.toml` (current working directory)
//! 2. `../tapverse.toml` or `../config.toml` (parent directory)
//! 3. `../../tapverse.toml` or `../../config.toml` (grandparent directory)
//! 4. Relative to executable location

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tapverse_domain::Config;

use crate::errors::ApiError;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ApiError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Values fail validation
pub fn load() -> Result<Config, ApiError> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `TAPVERSE_API_BASE_URL` must be present; every other variable falls back
/// to its default. A variable that is present but unparseable is an error,
/// not a silent default.
///
/// # Errors
/// Returns `ApiError::Config` if the base URL is missing, a value fails to
/// parse, or the resulting config fails validation.
pub fn load_from_env() -> Result<Config, ApiError> {
    let mut config = Config::default();
    config.api.base_url = env_var("TAPVERSE_API_BASE_URL")?;
    config.api.timeout_seconds = env_parse("TAPVERSE_API_TIMEOUT_SECS")?;

    if let Some(interval) = env_parse("TAPVERSE_POLL_INTERVAL_SECS")? {
        config.polling.interval_seconds = interval;
    }
    if let Some(failures) = env_parse("TAPVERSE_POLL_MAX_FAILURES")? {
        config.polling.max_transient_failures = failures;
    }
    if let Some(duration) = env_parse("TAPVERSE_POLL_MAX_DURATION_SECS")? {
        config.polling.max_poll_duration_seconds = duration;
    }
    config.session.store_path = std::env::var("TAPVERSE_SESSION_FILE").ok();

    config.validate().map_err(|e| ApiError::Config(e.to_string()))?;
    Ok(config)
}

/// Load configuration from a TOML file
///
/// If `path` is `None`, probes the standard locations via
/// [`probe_config_paths`].
///
/// # Errors
/// Returns `ApiError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Values fail validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config, ApiError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ApiError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ApiError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ApiError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate().map_err(|e| ApiError::Config(e.to_string()))?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Only TOML is supported; the extension is checked so a stray JSON or YAML
/// file produces a clear error instead of a parse failure.
fn parse_config(contents: &str, path: &Path) -> Result<Config, ApiError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ApiError::Config(format!("Invalid TOML format: {}", e))),
        _ => Err(ApiError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, up to two parent levels, and the
/// executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("tapverse.toml"),
            cwd.join("config.toml"),
            cwd.join("../tapverse.toml"),
            cwd.join("../config.toml"),
            cwd.join("../../tapverse.toml"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("tapverse.toml"),
                exe_dir.join("config.toml"),
                exe_dir.join("../tapverse.toml"),
                exe_dir.join("../config.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `ApiError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String, ApiError> {
    std::env::var(key)
        .map_err(|_| ApiError::Config(format!("Missing required environment variable: {}", key)))
}

/// Parse an optional environment variable
///
/// Absence is `Ok(None)`; presence with an unparseable value is an error.
fn env_parse<T>(key: &str) -> Result<Option<T>, ApiError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| ApiError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(None),
    }
}
