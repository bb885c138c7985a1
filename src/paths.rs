//! Centralized path definitions for cpfcheck
//!
//! ```text
//! ~/.cpfcheck/
//! └── config.toml               # Feedback messages, colors, display options
//! ```
//!
//! The `CPFCHECK_CONFIG` environment variable points at a different config
//! file and takes precedence over the home directory location.

use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "CPFCHECK_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".cpfcheck";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global cpfcheck directory.
///
/// Returns `~/.cpfcheck/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the config file path.
///
/// Returns `$CPFCHECK_CONFIG` when set and non-empty, otherwise
/// `~/.cpfcheck/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
