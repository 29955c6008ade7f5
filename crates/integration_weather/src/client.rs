//! OpenWeather client
//!
//! HTTP client for the OpenWeather current-weather endpoint.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use domain::WeatherReport;
use domain::value_objects::{GeoLocation, Language, Units};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::CurrentWeatherResponse;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Client is misconfigured (e.g. no API key)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl WeatherError {
    /// True for failures of the network exchange itself
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::Timeout
                | Self::RequestFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::RateLimitExceeded
        )
    }

    /// True when the service answered with something unparseable
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::ParseError(_))
    }

    fn from_reqwest(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            // The URL carries the API key; keep it out of error messages.
            Self::ConnectionFailed(strip_url(e))
        }
    }
}

fn strip_url(e: &reqwest::Error) -> String {
    let mut message = e.to_string();
    if let Some(url) = e.url() {
        message = message.replace(url.as_str(), "<redacted>");
    }
    message
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeather API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `appid` (excluded from serialization to prevent leaks)
    #[serde(skip_serializing, default)]
    pub api_key: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get display-ready current weather for a location
    ///
    /// Returns `Ok(None)` when the provider answers but lists no conditions.
    async fn current(
        &self,
        location: &GeoLocation,
        units: Units,
        lang: &Language,
    ) -> Result<Option<WeatherReport>, WeatherError>;
}

/// OpenWeather HTTP client implementation
pub struct OpenWeatherClient {
    client: Client,
    weather_url: String,
    api_key: String,
}

impl fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("weather_url", &self.weather_url)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    /// Create a new OpenWeather client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot be
    /// initialized.
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        if config.api_key.trim().is_empty() {
            return Err(WeatherError::ConfigurationError(
                "OpenWeather API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            weather_url: format!("{}/weather", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }

    /// Turn a provider body into a report
    fn parse_report(body: &str, units: Units) -> Result<Option<WeatherReport>, WeatherError> {
        let response: CurrentWeatherResponse =
            serde_json::from_str(body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Ok(response
            .into_readings()
            .map(|readings| WeatherReport::from_readings(readings, units)))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current(
        &self,
        location: &GeoLocation,
        units: Units,
        lang: &Language,
    ) -> Result<Option<WeatherReport>, WeatherError> {
        let params = [
            ("lat", location.latitude().to_string()),
            ("lon", location.longitude().to_string()),
            ("appid", self.api_key.clone()),
            ("units", units.as_str().to_string()),
            ("lang", lang.as_str().to_string()),
        ];

        debug!(%units, %lang, "Fetching current weather");

        let response = self
            .client
            .get(&self.weather_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| WeatherError::from_reqwest(&e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::from_reqwest(&e))?;

        Self::parse_report(&body, units)
    }
}
