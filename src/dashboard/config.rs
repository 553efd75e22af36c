//! Configuration for the dashboard

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_API_URL;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Metrics API base URL (default: http://localhost:5000)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Seconds between poll cycles (default: 30)
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_refresh_interval() -> u64 {
    30
}

fn default_request_timeout() -> u64 {
    10
}

impl Config {
    /// Load configuration from file, or use defaults if no file exists
    ///
    /// Without an explicit path, `~/.config/devops-dashboard/dashboard.toml` is
    /// used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(default_path);

        let config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Reject values the poller cannot work with
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.api_url.trim().is_empty(), "api_url must not be empty");
        ensure!(
            self.refresh_interval > 0,
            "refresh_interval must be at least 1 second"
        );
        ensure!(
            self.request_timeout > 0,
            "request_timeout must be at least 1 second"
        );
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn with_overrides(self, api_url: Option<String>, refresh_interval: Option<u64>) -> Self {
        Self {
            api_url: api_url.unwrap_or(self.api_url),
            refresh_interval: refresh_interval.unwrap_or(self.refresh_interval),
            ..self
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

fn default_path() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(".config/devops-dashboard/dashboard.toml");
    path.exists().then_some(path)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            refresh_interval: default_refresh_interval(),
            request_timeout: default_request_timeout(),
        }
    }
}
