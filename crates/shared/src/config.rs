//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Snapshot store configuration.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    /// Account aggregation relay configuration.
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Snapshot store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// Directory the snapshot document is stored in.
    #[serde(default = "default_snapshot_root")]
    pub root: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            root: default_snapshot_root(),
        }
    }
}

fn default_snapshot_root() -> String {
    "./data".to_string()
}

/// Account aggregation relay configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregationConfig {
    /// Base URL of the aggregation relay service.
    #[serde(default = "default_aggregation_url")]
    pub base_url: String,
    /// Whether aggregation sync is enabled. When disabled the server runs
    /// with manually entered records only.
    #[serde(default)]
    pub enabled: bool,
    /// Request timeout in seconds.
    #[serde(default = "default_aggregation_timeout")]
    pub timeout_secs: u64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            base_url: default_aggregation_url(),
            enabled: false,
            timeout_secs: default_aggregation_timeout(),
        }
    }
}

fn default_aggregation_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_aggregation_timeout() -> u64 {
    10
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("HEARTH").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
