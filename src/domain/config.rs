use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

/// Origin of the release-notes API.
pub const DEFAULT_API_BASE_URL: &str = "https://api2.casablanca.ai";

/// Error loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid configuration TOML.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configuration for reaching the release-notes API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Scheme and host the API path is appended to.
    pub api_base_url: String,

    /// Skip TLS certificate validation.
    ///
    /// Only meant for development servers with self-signed certificates.
    pub accept_invalid_certs: bool,

    /// Extra attempts after a failed fetch. Zero means a single request.
    pub retry: u32,

    /// Request timeout in seconds. Uses the HTTP client's default when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            accept_invalid_certs: false,
            retry: 0,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the configured request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_api_base_url")]
        api_base_url: String,

        #[serde(default)]
        accept_invalid_certs: bool,

        #[serde(default)]
        retry: u32,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeout_secs: Option<u64>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                api_base_url,
                accept_invalid_certs,
                retry,
                timeout_secs,
            } => Self {
                api_base_url,
                accept_invalid_certs,
                retry,
                timeout_secs,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            api_base_url: config.api_base_url,
            accept_invalid_certs: config.accept_invalid_certs,
            retry: config.retry,
            timeout_secs: config.timeout_secs,
        }
    }
}
