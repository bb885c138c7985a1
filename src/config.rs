//! Configuration management
//!
//! Feedback messages and display preferences are read from a TOML file.
//! Config is stored at `~/.cpfcheck/config.toml` unless `CPFCHECK_CONFIG`
//! or `--config` points elsewhere.

use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Color;
use serde::{Deserialize, Serialize};

use crate::paths;

/// cpfcheck configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Messages and colors shown beside the field
    #[serde(default)]
    pub feedback: FeedbackConfig,
    /// How results are printed
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Feedback element settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Message for a valid CPF
    #[serde(default = "default_valid_message")]
    pub valid_message: String,
    /// Message for an invalid CPF
    #[serde(default = "default_invalid_message")]
    pub invalid_message: String,
    /// Color name for the valid message
    #[serde(default = "default_valid_color")]
    pub valid_color: String,
    /// Color name for the invalid message
    #[serde(default = "default_invalid_color")]
    pub invalid_color: String,
}

fn default_valid_message() -> String {
    "CPF válido".to_string()
}

fn default_invalid_message() -> String {
    "CPF inválido".to_string()
}

fn default_valid_color() -> String {
    "green".to_string()
}

fn default_invalid_color() -> String {
    "red".to_string()
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            valid_message: default_valid_message(),
            invalid_message: default_invalid_message(),
            valid_color: default_valid_color(),
            invalid_color: default_invalid_color(),
        }
    }
}

impl FeedbackConfig {
    /// Resolve the configured color names
    ///
    /// Returns `(valid, invalid)` colors.
    pub fn colors(&self) -> anyhow::Result<(Color, Color)> {
        Ok((parse_color(&self.valid_color)?, parse_color(&self.invalid_color)?))
    }
}

fn parse_color(name: &str) -> anyhow::Result<Color> {
    name.parse::<Color>().map_err(|()| anyhow::anyhow!("Unknown color: {name}"))
}

/// Output preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print valid identifiers as `000.000.000-00`
    #[serde(default = "default_true")]
    pub formatted: bool,
    /// Colorize human-readable output (validate tags and watch feedback)
    #[serde(default = "default_true")]
    pub color: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            formatted: true,
            color: true,
        }
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults
    /// when the file is missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = paths::global_config();
        if path.exists() {
            Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("ignoring config at {}: {e:#}", path.display());
                Self::default()
            })
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Self::default()
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.feedback.colors()?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
