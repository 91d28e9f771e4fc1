//! Ingestor configuration: TOML file, environment overrides, defaults.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, the
//! `CONCERT_API_URL` / `CONCERT_REQUEST_TIMEOUT_SECS` environment variables,
//! then an explicit API URL (the CLI `--api-url` flag). See [`IngestorConfig::resolve`].
//!
//! ```toml
//! api_url = "https://groupietrackers.herokuapp.com/api"
//! request_timeout_secs = 10
//! ```

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use shared_utils::env::{InvalidEnvVarError, env_override, parse_env_override};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://groupietrackers.herokuapp.com/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const API_URL_ENV: &str = "CONCERT_API_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "CONCERT_REQUEST_TIMEOUT_SECS";

/// Errors related to loading the ingestor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Env(#[from] InvalidEnvVarError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestorConfig {
    /// Locator of the root index document.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Deadline for each single retrieval, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for IngestorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl IngestorConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Applies `CONCERT_API_URL` and `CONCERT_REQUEST_TIMEOUT_SECS` when set.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(url) = env_override(API_URL_ENV) {
            self.api_url = url;
        }
        if let Some(secs) = parse_env_override::<u64>(REQUEST_TIMEOUT_ENV)? {
            self.request_timeout_secs = secs;
        }
        self.validate()
    }

    /// Builds the effective config from an optional file, the environment and
    /// an optional explicit API URL, in increasing precedence.
    pub fn resolve(path: Option<&Path>, api_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => load_config_path(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        if let Some(url) = api_url {
            config.api_url = url.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_url must not be empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Parse and validate a config from a TOML string.
pub fn load_config_str(s: &str) -> Result<IngestorConfig, ConfigError> {
    let cfg: IngestorConfig = toml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Read, parse and validate a config file.
pub fn load_config_path(path: impl AsRef<Path>) -> Result<IngestorConfig, ConfigError> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_config_str(&s)
}
