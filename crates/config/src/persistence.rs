//! Configuration file reading and writing.
//!
//! Files may be JSON5 (`.json5`, with comments and trailing commas) or plain
//! JSON. Both are read with the JSON5 parser; writes always produce
//! pretty-printed JSON.
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./lanecard.json5` or `./lanecard.json`
//! 2. User: `~/.config/lanecard/config.json5` or `~/.config/lanecard/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["lanecard.json5", "lanecard.json"];

/// Name of the application directory under the user config directory.
const USER_CONFIG_DIR: &str = "lanecard";

/// User configuration file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file in the working directory or the user
/// config directory.
///
/// # Examples
///
/// ```no_run
/// use lanecard_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR));
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Finds the configuration file, looking in `local_dir` first and then in
/// `user_dir` (the application's directory inside the user config dir).
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Returns the application directory inside the user config directory.
///
/// This is typically `~/.config/lanecard/` on Unix systems.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the config directory cannot
/// be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default user configuration file path.
///
/// This is typically `~/.config/lanecard/config.json5`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the config directory cannot
/// be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
///
/// # Examples
///
/// ```no_run
/// use lanecard_config::persistence::read_config_file;
/// use lanecard_config::Config;
///
/// # fn main() -> lanecard_config::Result<()> {
/// let config: Config = read_config_file("lanecard.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a configuration to a file as pretty-printed JSON, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written, or if the
/// value cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_error)
}
