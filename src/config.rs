//! Dagwalk Configuration Module
//!
//! Persistent defaults for output rendering. Config is stored in
//! `~/.config/dagwalk/config.toml`.
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. CLI flags (`--show-order`, `--format`)
//! 2. Environment variables (`DAGWALK_SHOW_ORDER`, `DAGWALK_FORMAT`)
//! 3. Config file (`~/.config/dagwalk/config.toml`)
//! 4. Built-in defaults (text output, no order line)

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DagwalkError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DagwalkConfig {
    /// Output rendering defaults
    #[serde(default)]
    pub output: OutputDefaults,
}

/// Output rendering defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputDefaults {
    /// Print the full order line for every case
    pub show_order: Option<bool>,

    /// Result rendering: "text" or "json"
    pub format: Option<String>,
}

impl DagwalkConfig {
    /// Get the config directory path
    ///
    /// Returns `~/.config/dagwalk` on Linux/macOS
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dagwalk")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load config from disk, or return defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| DagwalkError::ConfigError {
            reason: format!("Failed to read config file: {}", e),
        })?;

        toml::from_str(&content).map_err(|e| DagwalkError::ConfigError {
            reason: format!("Failed to parse config file: {}", e),
        })
    }

    /// Save config to disk, creating the directory if needed
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir).map_err(|e| DagwalkError::ConfigError {
            reason: format!("Failed to create config directory: {}", e),
        })?;

        let path = Self::config_path();
        let content = toml::to_string_pretty(self).map_err(|e| DagwalkError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&path, content).map_err(|e| DagwalkError::ConfigError {
            reason: format!("Failed to write config file: {}", e),
        })
    }

    /// Apply environment variable overrides on top of file values.
    ///
    /// Empty variables are ignored rather than clearing a setting.
    pub fn with_env(mut self) -> Self {
        if let Ok(value) = std::env::var("DAGWALK_SHOW_ORDER") {
            if !value.is_empty() {
                self.output.show_order = Some(matches!(value.as_str(), "1" | "true" | "yes"));
            }
        }

        if let Ok(value) = std::env::var("DAGWALK_FORMAT") {
            if !value.is_empty() {
                self.output.format = Some(value);
            }
        }

        self
    }

    /// Effective order-line setting
    pub fn show_order(&self) -> bool {
        self.output.show_order.unwrap_or(false)
    }

    /// Effective format name
    pub fn format_name(&self) -> &str {
        self.output.format.as_deref().unwrap_or("text")
    }
}
