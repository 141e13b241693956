//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Listening address and route prefix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,

    /// Prefix under which the player routes are mounted (e.g. "/rest")
    pub base_path: String,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_path: "/rest".to_string(),
        }
    }
}

/// Paging limits of the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size used when the request names none
    pub default_page_size: usize,

    /// Optional upper limit, larger requested sizes are rejected
    pub max_page_size: Option<usize>,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: 3,
            max_page_size: None,
        }
    }
}

/// Log filter used when `RUST_LOG` is not set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Complete configuration of the player registry server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ListenConfig,
    pub paging: PagingConfig,
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid config file '{}'", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply `PLAYERS_*` environment overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`
    ///
    /// Recognised keys: `PLAYERS_HOST`, `PLAYERS_PORT`, `PLAYERS_BASE_PATH`,
    /// `PLAYERS_LOG`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup("PLAYERS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PLAYERS_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("PLAYERS_PORT is not a valid port: '{}'", port))?;
        }
        if let Some(base_path) = lookup("PLAYERS_BASE_PATH") {
            self.server.base_path = base_path;
        }
        if let Some(filter) = lookup("PLAYERS_LOG") {
            self.logging.filter = filter;
        }
        Ok(self)
    }

    /// `host:port` the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Route prefix normalised to either "" or "/segment" without trailing slash
    pub fn base_path(&self) -> String {
        let trimmed = self.server.base_path.trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}
