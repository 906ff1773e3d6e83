//! Client configuration.
//!
//! Resolution order, later wins:
//! 1. Built-in defaults
//! 2. `~/.config/griefworks/config.toml` (or an explicit path)
//! 3. `GRIEFWORKS_*` environment variables

use std::path::{Path, PathBuf};
use std::time::Duration;

use griefworks_core::error::{GriefError, Result};
use griefworks_core::retry::{DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS, RetryPolicy};
use serde::{Deserialize, Serialize};

use crate::paths::GriefPaths;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

pub const ENV_API_BASE_URL: &str = "GRIEFWORKS_API_BASE_URL";
pub const ENV_MAX_ATTEMPTS: &str = "GRIEFWORKS_MAX_ATTEMPTS";
pub const ENV_BASE_DELAY_MS: &str = "GRIEFWORKS_BASE_DELAY_MS";

/// Settings for talking to the grief support backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are appended to.
    pub api_base_url: String,
    pub max_attempts: u32,
    pub base_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay_ms: DEFAULT_BASE_DELAY.as_millis() as u64,
        }
    }
}

impl ClientConfig {
    /// # Errors
    ///
    /// Returns `GriefError::Config` if `max_attempts` is zero.
    pub fn retry_policy(&self) -> Result<RetryPolicy> {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.base_delay_ms))
    }
}

/// Loads [`ClientConfig`] from file and environment.
pub struct ConfigService {
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Uses the default config file location.
    pub fn new() -> Self {
        Self {
            path: GriefPaths::config_file().ok(),
        }
    }

    /// Uses an explicit config file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the config with process environment overrides applied.
    pub fn load(&self) -> Result<ClientConfig> {
        self.load_with_env(|name| std::env::var(name).ok())
    }

    /// Loads the config, reading overrides through `env`.
    ///
    /// # Errors
    ///
    /// Returns `GriefError::Config` if the file exists but cannot be read or
    /// parsed, or if an override is not a valid number. A missing file is
    /// not an error.
    pub fn load_with_env<F>(&self, env: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    GriefError::config(format!("Failed to read {}: {e}", path.display()))
                })?;
                let config: ClientConfig = toml::from_str(&content)?;
                tracing::debug!(path = %path.display(), "Loaded client config file");
                config
            }
            _ => ClientConfig::default(),
        };

        if let Some(url) = env(ENV_API_BASE_URL) {
            config.api_base_url = url;
        }
        if let Some(value) = env(ENV_MAX_ATTEMPTS) {
            config.max_attempts = parse_env(ENV_MAX_ATTEMPTS, &value)?;
        }
        if let Some(value) = env(ENV_BASE_DELAY_MS) {
            config.base_delay_ms = parse_env(ENV_BASE_DELAY_MS, &value)?;
        }

        config.retry_policy()?;
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| GriefError::config(format!("{name} is not a valid number: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let service = ConfigService::with_path("/nonexistent/griefworks/config.toml");
        let config = service.load_with_env(no_env).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.retry_policy().unwrap(), RetryPolicy::default());
    }

    #[test]
    fn test_env_overrides() {
        let service = ConfigService::with_path("/nonexistent/config.toml");
        let config = service
            .load_with_env(|name| match name {
                ENV_API_BASE_URL => Some("http://backend:9000/api/v1".to_string()),
                ENV_MAX_ATTEMPTS => Some("3".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.api_base_url, "http://backend:9000/api/v1");
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.base_delay_ms, 1000);
    }

    #[test]
    fn test_bad_env_number() {
        let service = ConfigService::with_path("/nonexistent/config.toml");
        let err = service
            .load_with_env(|name| (name == ENV_BASE_DELAY_MS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, GriefError::Config(_)));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let service = ConfigService::with_path("/nonexistent/config.toml");
        let result =
            service.load_with_env(|name| (name == ENV_MAX_ATTEMPTS).then(|| "0".to_string()));
        assert!(result.is_err());
    }
}
