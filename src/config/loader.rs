use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

pub const ENDPOINT_ENV: &str = "NIROCHECK_ENDPOINT_URL";
pub const STATE_DIR_ENV: &str = "NIROCHECK_STATE_DIR";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Values given on the command line. They win over env and file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint_url: Option<String>,
    pub state_dir: Option<PathBuf>,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/nirocheck/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("nirocheck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Layer environment variables over the file values.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Same as [`Config::apply_env`] with an injectable lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENDPOINT_ENV).filter(|u| !u.trim().is_empty()) {
            self.remote.endpoint_url = Some(url);
        }
        if let Some(dir) = lookup(STATE_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            self.storage.state_dir = Some(PathBuf::from(dir));
        }
    }

    /// Layer command-line values over everything else.
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(url) = overrides.endpoint_url {
            self.remote.endpoint_url = Some(url);
        }
        if let Some(dir) = overrides.state_dir {
            self.storage.state_dir = Some(dir);
        }
    }

    /// The trimmed endpoint URL, `None` when unset or blank.
    ///
    /// A non-blank value that is not an http(s) URL is an error.
    pub fn endpoint(&self) -> Result<Option<Url>, ConfigError> {
        let Some(raw) = self.remote.endpoint_url.as_deref().map(str::trim) else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }

        let url = Url::parse(raw).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid endpoint URL '{}': {}", raw, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("Endpoint URL '{}' must use http or https", raw),
            });
        }
        Ok(Some(url))
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The push timeout is positive
    /// - The tick rate is positive
    /// - The endpoint, when set, is an http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.remote.push_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "push_timeout_seconds must be greater than 0".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than 0".to_string(),
            });
        }

        self.endpoint()?;
        Ok(())
    }
}
