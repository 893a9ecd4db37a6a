//! Configuration management for Prospector.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `prospector.toml` file
//! 3. User config `~/.config/prospector/config.toml`
//! 4. Built-in defaults (lowest priority)
//!
//! The SynBioHub password is never read from a file; it comes only from the
//! `SBH_PASSWORD` environment variable.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Environment does not contain SBH_PASSWORD")]
    MissingCredential,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SynBioHub connection configuration.
    pub synbiohub: SynBioHubConfig,

    /// Traversal engine configuration.
    pub traversal: TraversalConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            synbiohub: SynBioHubConfig::default(),
            traversal: TraversalConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./prospector.toml` (project local)
    /// 2. `~/.config/prospector/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new("prospector.toml").exists() {
            return Self::from_file("prospector.toml");
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("prospector").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(server) = std::env::var("SBH_SERVER") {
            self.synbiohub.server = server;
        }
        if let Ok(user) = std::env::var("SBH_USER") {
            self.synbiohub.user = user;
        }
        if let Ok(capacity) = std::env::var("PROSPECTOR_CACHE_CAPACITY") {
            if let Ok(n) = capacity.parse() {
                self.traversal.cache_capacity = n;
            }
        }
    }

    /// The SynBioHub password, from the environment only.
    pub fn password() -> Result<String, ConfigError> {
        std::env::var(PASSWORD_ENV_VAR).map_err(|_| ConfigError::MissingCredential)
    }

    /// The server to query, honoring the staging flag.
    pub fn server(&self) -> &str {
        if self.synbiohub.staging {
            &self.synbiohub.staging_server
        } else {
            &self.synbiohub.server
        }
    }
}

/// SynBioHub connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynBioHubConfig {
    /// Production server URL.
    pub server: String,

    /// Staging server URL; queries there spoof the production graph.
    pub staging_server: String,

    /// Login user.
    pub user: String,

    /// Query the staging server instead of production.
    pub staging: bool,
}

impl Default for SynBioHubConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            staging_server: DEFAULT_STAGING_SERVER.to_string(),
            user: DEFAULT_USER.to_string(),
            staging: false,
        }
    }
}

/// Traversal engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Capacity of each memoization cache.
    pub cache_capacity: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
