//! Weather adapter - Implements WeatherPort using integration_weather

use std::fmt;

use application::{error::UpstreamError, ports::WeatherPort};
use async_trait::async_trait;
use domain::WeatherReport;
use domain::value_objects::{GeoLocation, Language, Units};
use integration_weather::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{instrument, warn};

/// Adapter for weather services using the OpenWeather API
///
/// Without an API key the adapter still exists but every fetch fails as an
/// upstream error, the same way the provider rejects an unauthenticated call.
pub struct WeatherAdapter {
    client: Option<OpenWeatherClient>,
}

impl fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("configured", &self.client.is_some())
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client fails to
    /// initialize.
    pub fn new(config: &WeatherConfig) -> Result<Self, UpstreamError> {
        let client = OpenWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self {
            client: Some(client),
        })
    }

    /// Create an adapter that has no API key to call the provider with
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { client: None }
    }

    /// Whether the adapter can reach the provider
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Classify a client error for the application layer
    fn map_error(err: WeatherError) -> UpstreamError {
        if err.is_transport() {
            UpstreamError::transport(err.to_string())
        } else if err.is_format() {
            UpstreamError::format(err.to_string())
        } else {
            UpstreamError::unknown(err.to_string())
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn fetch(
        &self,
        location: &GeoLocation,
        units: Units,
        lang: &Language,
    ) -> Result<Option<WeatherReport>, UpstreamError> {
        let Some(client) = &self.client else {
            warn!("OpenWeather API key is not configured");
            return Err(UpstreamError::unknown(
                "OpenWeather API key is not configured",
            ));
        };

        client.current(location, units, lang).await.map_err(|e| {
            let mapped = Self::map_error(e);
            warn!(kind = %mapped.kind, error = %mapped.message, "Weather fetch failed");
            mapped
        })
    }
}
