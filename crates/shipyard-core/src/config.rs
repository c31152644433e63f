// Rust guideline compliant 2026-10-12

//! Configuration management for Shipyard.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Shipyard behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Page size used by list queries when none is given.
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Maximum log level written to stderr.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether writes take an exclusive lock on the data file.
    #[serde(default = "default_use_lock")]
    pub use_lock: bool,
}

fn default_page_size() -> i64 {
    3
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_use_lock() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            use_lock: default_use_lock(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.shipyard/config.toml`
    /// 3. Environment variables with `SHIPYARD_` prefix
    ///
    /// # Arguments
    ///
    /// * `shipyard_dir` - Path to the `.shipyard` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(shipyard_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = shipyard_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `SHIPYARD_DEFAULT_PAGE_SIZE` - Default page size (> 0)
    /// - `SHIPYARD_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `SHIPYARD_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    /// - `SHIPYARD_USE_LOCK` - Lock the data file on writes (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SHIPYARD_DEFAULT_PAGE_SIZE") {
            self.default_page_size = val.parse().map_err(|_| {
                Error::Config("SHIPYARD_DEFAULT_PAGE_SIZE must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("SHIPYARD_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "SHIPYARD_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("SHIPYARD_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("SHIPYARD_USE_LOCK") {
            self.use_lock = val.parse().map_err(|_| {
                Error::Config("SHIPYARD_USE_LOCK must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - default_page_size is not positive
    /// - log_level is not a known level
    fn validate(&self) -> Result<()> {
        if self.default_page_size <= 0 {
            return Err(Error::Config(format!(
                "default_page_size must be greater than 0, got {}",
                self.default_page_size
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join("/"),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `shipyard_dir` - Path to the `.shipyard` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, shipyard_dir: &Path) -> Result<()> {
        let config_path = shipyard_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
