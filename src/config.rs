//! uemu Configuration
//!
//! Handles parsing and management of uemu.toml configuration files.

use crate::dump::BoolStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Name of the configuration file searched for by [`UemuConfig::find_and_load`].
pub const CONFIG_FILE: &str = "uemu.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching uemu.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UemuConfig {
    /// Parsing behaviour
    #[serde(default)]
    pub parse: ParseConfig,

    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,
}

impl UemuConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: UemuConfig = toml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                log::debug!("no {} found, using defaults", CONFIG_FILE);
                return Ok(Self::default());
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// How `u64` text is handled by run-time dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UlongParsing {
    /// Parse the full unsigned 64-bit range.
    #[default]
    Native,
    /// Refuse with an unsupported-operation error.
    Unsupported,
}

/// Parsing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParseConfig {
    #[serde(default)]
    pub ulong: UlongParsing,

    /// Trim ASCII whitespace before dispatching
    #[serde(default)]
    pub trim_whitespace: bool,
}

/// Output format for the command-line driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub bool_style: BoolStyle,
}
