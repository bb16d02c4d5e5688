//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the lanecard application.

use serde::{Deserialize, Serialize};

use crate::card::CardDefaults;
use crate::error::Result;
use crate::logging::{LOG_LEVEL_ENV, LoggingConfig};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// The main configuration struct for the lanecard application.
///
/// # Examples
///
/// ```
/// use lanecard_config::{CardDefaults, Config, LoggingConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert!(config.card.editable);
///
/// // Create a custom config
/// let config = Config {
///     card: CardDefaults::read_only(),
///     logging: LoggingConfig::to_file("/tmp/lanecard.log").with_level("debug"),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Presentation settings applied to every card.
    #[serde(default)]
    pub card: CardDefaults,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./lanecard.json5` or `./lanecard.json`
    /// 2. User: `~/.config/lanecard/config.json5` or `~/.config/lanecard/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    /// The `LANECARD_LOG` environment variable overrides the log level.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the resulting configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lanecard_config::Config;
    ///
    /// # fn example() -> lanecard_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Cards editable: {}", config.card.editable);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lanecard_config::Config;
    ///
    /// # fn example() -> lanecard_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies environment overrides using `lookup` to read variables.
    ///
    /// Only [`LOG_LEVEL_ENV`] is recognized; empty values are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanecard_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_env_overrides(|key| (key == "LANECARD_LOG").then(|| "debug".to_string()));
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|l| !l.is_empty()) {
            self.logging.level = level;
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanecard_config::{Config, LoggingConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.logging = LoggingConfig::default().with_level("chatty");
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        Ok(())
    }
}
