//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use employee_client::{QueryEncoding, DEFAULT_BASE_URL};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Employee API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Screen flow configuration
    #[serde(default)]
    pub flow: FlowConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Root of the employee-management service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout (none by default)
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,

    /// How the OTP query string is built
    #[serde(default)]
    pub query_encoding: QueryEncoding,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlowConfig {
    /// Route the session opens on
    #[serde(default = "default_start_route")]
    pub start_route: String,

    /// Send direct entries that lack navigation state back to registration
    #[serde(default)]
    pub guard_direct_entry: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
            query_encoding: QueryEncoding::default(),
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            start_route: default_start_route(),
            guard_direct_entry: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_start_route() -> String {
    "/".into()
}

fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_builder(config::Config::builder().add_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(false),
        ))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
