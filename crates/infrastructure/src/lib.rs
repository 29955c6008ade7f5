//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: Nominatim and
//! OpenWeather adapters, SQLite stores, Argon2 password hashing, plus
//! configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, ConfigIssue, DatabaseConfig, Environment, GeocodingAppConfig, ServerConfig,
    WeatherAppConfig,
};
pub use persistence::{
    ConnectionPool, SqliteUserStore, SqliteWeatherHistoryStore, create_pool,
};
pub use telemetry::{LogFormat, init_logging};
