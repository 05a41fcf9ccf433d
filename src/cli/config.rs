//! Service configuration
//!
//! Loaded from an optional JSON file, then overridden by environment
//! variables (`PORT`, `CATALOG_DATA_PATH`, `CATALOG_ENV`). Every field has
//! a default, so no file at all is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::config::{default_host, default_port};
use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

pub const ENV_PORT: &str = "PORT";
pub const ENV_DATA_PATH: &str = "CATALOG_DATA_PATH";
pub const ENV_ENVIRONMENT: &str = "CATALOG_ENV";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Host to bind (default "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind (default 3001)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Catalog JSON file (default "products.json")
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Allowed CORS origins; empty allows any
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Deployment environment name (default "development")
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("products.json")
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_path: default_data_path(),
            cors_origins: Vec::new(),
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load configuration from file. A missing file yields the defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        Ok(config)
    }

    /// File, then process environment, then validation
    pub fn resolve(path: &Path) -> CliResult<Self> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from `lookup` (the process environment in
    /// production, a map in tests)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.trim().parse().map_err(|_| {
                CliError::config_error(format!("Invalid {}: '{}'", ENV_PORT, port))
            })?;
        }
        if let Some(path) = lookup(ENV_DATA_PATH) {
            self.data_path = PathBuf::from(path);
        }
        if let Some(environment) = lookup(ENV_ENVIRONMENT) {
            self.environment = environment;
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(CliError::config_error("data_path must not be empty"));
        }
        Ok(())
    }

    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }
}
