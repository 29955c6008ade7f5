//! Tracing subscriber setup

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

/// Console log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Select the format configured for the server
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        if config.json_logs() {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The fallback filter string did not parse
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber was already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Build the filter, preferring `RUST_LOG` over the configured fallback
fn build_filter(fallback: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(fallback).map_err(|e| TelemetryError::InvalidFilter {
        filter: fallback.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber
///
/// Call once at startup, before anything logs.
pub fn init_logging(format: LogFormat, fallback_filter: &str) -> Result<(), TelemetryError> {
    let env_filter = build_filter(fallback_filter)?;

    let (json_layer, text_layer) = match format {
        LogFormat::Json => (
            Some(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            ),
            None,
        ),
        LogFormat::Text => (
            None,
            Some(fmt::layer().with_target(true).with_line_number(true)),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(format = ?format, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_server_config() {
        let mut config = ServerConfig::default();
        assert_eq!(LogFormat::from_config(&config), LogFormat::Text);

        config.log_format = "json".to_string();
        assert_eq!(LogFormat::from_config(&config), LogFormat::Json);
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(ServerConfig::default().log_filter).is_ok());
    }

    #[test]
    fn invalid_filter_error_names_the_filter() {
        let err = TelemetryError::InvalidFilter {
            filter: "bad[".to_string(),
            reason: "unbalanced".to_string(),
        };
        assert!(err.to_string().contains("bad["));
    }
}
