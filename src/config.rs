//! Configuration management for MD Highlighter
//!
//! Tokenizer limits and dump output settings, persisted as JSON in the
//! user's configuration directory.

use crate::error::{ConfigError, ConfigResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier following reverse-DNS convention
pub const APP_ID: &str = "com.mdhighlighter.Tokenizer";

/// Name of the configuration file inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Deepest heading level Markdown allows
pub const MAX_HEADING_LEVEL: usize = 6;

/// Most leading spaces a heading may have
pub const DEFAULT_HEADING_INDENT: usize = 3;

/// Default width of the value column in table output
pub const DEFAULT_VALUE_WIDTH: usize = 40;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tokenizer limits
    pub tokenizer: TokenizerConfig,

    /// Token dump output
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from the default location, or return defaults
    pub fn load() -> ConfigResult<Self> {
        Self::load_or_default(Self::config_file().ok())
    }

    /// Load from `path` if there is a file there, otherwise use defaults
    pub fn load_or_default(path: Option<PathBuf>) -> ConfigResult<Self> {
        let Some(path) = path else {
            log::warn!("No configuration directory available, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            log::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let path = expand_tilde(path);
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::LoadError {
            path: path.clone(),
            source,
        })?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|source| ConfigError::ParseError { path: path.clone(), source })?;
        config.validate()?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> ConfigResult<()> {
        self.tokenizer.validate()?;
        if self.output.max_value_width < 4 {
            return Err(ConfigError::InvalidValue {
                key: "output.max_value_width".to_string(),
                reason: "must be at least 4".to_string(),
            });
        }
        Ok(())
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }

    /// Get the configuration file path
    pub fn config_file() -> ConfigResult<PathBuf> {
        Self::config_dir().map(|p| p.join(CONFIG_FILE_NAME))
    }
}

/// Tokenizer limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Longest `#` run still treated as a heading
    pub max_heading_level: usize,

    /// Most leading spaces allowed before a heading
    pub max_heading_indent: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_heading_level: MAX_HEADING_LEVEL,
            max_heading_indent: DEFAULT_HEADING_INDENT,
        }
    }
}

impl TokenizerConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_HEADING_LEVEL).contains(&self.max_heading_level) {
            return Err(ConfigError::InvalidValue {
                key: "tokenizer.max_heading_level".to_string(),
                reason: format!("must be between 1 and {}", MAX_HEADING_LEVEL),
            });
        }
        Ok(())
    }
}

/// Token dump output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,

    /// Values longer than this are truncated in table output
    pub max_value_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            max_value_width: DEFAULT_VALUE_WIDTH,
        }
    }
}

/// Output format for the token dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned line per token
    #[default]
    Table,
    /// A JSON array of tokens
    Json,
}
