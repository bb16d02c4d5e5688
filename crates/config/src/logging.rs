//! Logging configuration.
//!
//! The terminal belongs to the TUI while it runs, so log output can only go
//! to a file. Logging stays off unless [`LoggingConfig::file`] is set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Log levels accepted by [`LoggingConfig::level`], from most to least verbose.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log level.
pub const LOG_LEVEL_ENV: &str = "LANECARD_LOG";

/// Configuration for log output.
///
/// # Examples
///
/// ```
/// use lanecard_config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// assert!(config.file.is_none());
/// assert_eq!(config.level, "info");
/// assert!(config.validate().is_ok());
///
/// let config = LoggingConfig::to_file("/tmp/lanecard.log").with_level("verbose");
/// assert!(config.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// File receiving log output. Logging is disabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Minimum level of logged events, one of [`LOG_LEVELS`].
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Creates a configuration logging to `path` at the default level.
    #[must_use]
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            level: default_level(),
        }
    }

    /// Sets the log level.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Returns whether log output is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Validates the log level.
    ///
    /// Levels are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if the level is unknown.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel {
                level: self.level.clone(),
                expected: LOG_LEVELS.join(", "),
            })
        }
    }
}
