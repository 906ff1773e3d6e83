//! Path resolution for Grief Works configuration.
//!
//! ```text
//! ~/.config/griefworks/
//! └── config.toml        # Client configuration (optional)
//! ```
//!
//! Session data is never written to disk.

use std::path::PathBuf;

const APP_DIR: &str = "griefworks";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct GriefPaths;

impl GriefPaths {
    /// Returns the Grief Works configuration directory (e.g. `~/.config/griefworks/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`. The file may not exist.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
