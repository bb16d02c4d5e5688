//! Configuration management for the lanecard application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files, environment variables and defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`card`]: Default presentation settings for cards
//! - [`logging`]: Log file and level settings
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment variables (`LANECARD_LOG`)
//! 2. Local config (`./lanecard.json5` or `./lanecard.json`)
//! 3. User config (`~/.config/lanecard/config.json5` or `~/.config/lanecard/config.json`)
//! 4. Built-in defaults
//!
//! # Example Configuration
//!
//! ```json5
//! {
//!   card: { editable: true, hide_delete_icon: false },
//!   // Logging is off unless a file is given
//!   logging: { file: "/tmp/lanecard.log", level: "debug" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use lanecard_config::Config;
//!
//! # fn example() -> lanecard_config::Result<()> {
//! let config = Config::load()?;
//! if config.logging.is_enabled() {
//!     println!("Logging at {}", config.logging.level);
//! }
//! # Ok(())
//! # }
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use card::CardDefaults;
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
