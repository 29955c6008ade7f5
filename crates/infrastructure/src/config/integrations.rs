//! Integration configurations: Nominatim geocoding and OpenWeather.

use std::fmt;

use integration_geocoding::NominatimConfig;
use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Geocoding Configuration
// ==============================

/// Nominatim geocoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Nominatim base URL
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Identifying User-Agent required by the Nominatim usage policy
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout")]
    pub timeout_secs: u64,

    /// Pause after every geocoding call, in milliseconds
    #[serde(default = "default_rate_limit_delay_ms")]
    pub rate_limit_delay_ms: u64,
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    "MeteorCloud/1.0".to_string()
}

const fn default_geocoding_timeout() -> u64 {
    10
}

const fn default_rate_limit_delay_ms() -> u64 {
    1000
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_geocoding_timeout(),
            rate_limit_delay_ms: default_rate_limit_delay_ms(),
        }
    }
}

impl GeocodingAppConfig {
    /// Convert to the client configuration
    #[must_use]
    pub fn to_client_config(&self) -> NominatimConfig {
        NominatimConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout_secs,
            rate_limit_delay_ms: self.rate_limit_delay_ms,
        }
    }
}

// ==============================
// Weather Configuration
// ==============================

/// OpenWeather configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeather API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// OpenWeather API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_weather_timeout() -> u64 {
    10
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl WeatherAppConfig {
    /// Whether a non-blank API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Convert to the client configuration, or `None` without an API key
    #[must_use]
    pub fn to_client_config(&self) -> Option<WeatherConfig> {
        if !self.has_api_key() {
            return None;
        }
        let api_key = self.api_key.as_ref()?.expose_secret().trim().to_string();
        Some(WeatherConfig {
            base_url: self.base_url.clone(),
            api_key,
            timeout_secs: self.timeout_secs,
        })
    }
}
