// Service configuration.
//
// Sources, later ones overriding earlier ones:
// - built-in defaults
// - config/default.{toml,yaml,json} (optional)
// - config/{APP_ENV}.* (optional)
// - APP__ prefixed environment variables, e.g. APP__API__BASE_URL

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::modules::manuscripts::core::timeline::TimelineOptions;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub timeline: TimelineConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the journal API, e.g. https://journal.example/api
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Sort assignments by `assigned_at` instead of trusting API order.
    pub sort_by_timestamp: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("api.base_url", "http://localhost:8000/api")?
            .set_default("api.request_timeout_secs", 15)?
            .set_default("timeline.sort_by_timestamp", false)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs)
    }

    pub fn timeline_options(&self) -> TimelineOptions {
        TimelineOptions::sorted(self.timeline.sort_by_timestamp)
    }
}
