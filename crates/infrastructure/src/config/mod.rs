//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `database`: SQLite database settings
//! - `integrations`: Nominatim geocoding and OpenWeather

mod database;
mod integrations;
mod server;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use database::DatabaseConfig;
pub use integrations::{GeocodingAppConfig, WeatherAppConfig};
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
///
/// Controls how strictly missing settings are treated at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - missing settings only warn
    #[default]
    Development,
    /// Production environment - missing settings abort startup
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// A configuration problem found by [`AppConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted key of the offending setting (e.g. `weather.api_key`)
    pub key: &'static str,
    /// Human-readable description
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Nominatim geocoding configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// OpenWeather configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Sources, later ones winning: built-in defaults, `config.toml` in the
    /// working directory, then `METEORCLOUD_*` environment variables with
    /// `__` separating nested keys (e.g. `METEORCLOUD_WEATHER__API_KEY`).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(Self::env_source())
    }

    fn env_source() -> config::Environment {
        config::Environment::with_prefix("METEORCLOUD")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.allowed_origins")
            .try_parsing(true)
    }

    fn load_with(env: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(env);

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Report settings that are missing or unusable
    ///
    /// An empty result means the configuration is complete.
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !self.weather.has_api_key() {
            issues.push(ConfigIssue {
                key: "weather.api_key",
                message: "OpenWeather API key is not set (METEORCLOUD_WEATHER__API_KEY)"
                    .to_string(),
            });
        }

        if self.geocoding.user_agent.trim().is_empty() {
            issues.push(ConfigIssue {
                key: "geocoding.user_agent",
                message: "Nominatim requires an identifying User-Agent".to_string(),
            });
        }

        if self.database.max_connections == 0 {
            issues.push(ConfigIssue {
                key: "database.max_connections",
                message: "must be at least 1".to_string(),
            });
        }

        issues
    }

    /// Whether the server should refuse to start with these issues
    #[must_use]
    pub fn is_fatal(&self, issues: &[ConfigIssue]) -> bool {
        self.environment == Environment::Production && !issues.is_empty()
    }
}
