//! Nominatim geocoding client

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::Coordinates;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{config::NominatimConfig, error::GeocodingError};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a place name to the provider's best match
    ///
    /// Returns `Ok(None)` when the provider has no match for the name.
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodingError>;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    search_url: String,
    rate_limit_delay: Duration,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            search_url: format!("{}/search", config.base_url.trim_end_matches('/')),
            rate_limit_delay: config.rate_limit_delay(),
        })
    }

    async fn search(&self, place: &str) -> Result<Option<Coordinates>, GeocodingError> {
        let params = [("q", place), ("format", "json"), ("limit", "1")];

        let response = self
            .client
            .get(&self.search_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                GeocodingError::Timeout
            } else {
                GeocodingError::ConnectionFailed(e.to_string())
            }
        })?;

        let results: Vec<NominatimResult> =
            serde_json::from_str(&body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let Some(first) = results.into_iter().next() else {
            return Ok(None);
        };

        let lat: f64 = first
            .lat
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid latitude: {}", first.lat)))?;
        let lon: f64 = first
            .lon
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid longitude: {}", first.lon)))?;

        Coordinates::new(lat, lon, first.display_name)
            .map(Some)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodingError> {
        let result = self.search(place).await;

        match &result {
            Ok(Some(found)) => debug!(
                lat = found.latitude(),
                lon = found.longitude(),
                display_name = found.display_name(),
                "Geocoded place"
            ),
            Ok(None) => debug!("No geocoding match"),
            Err(e) => warn!(error = %e, "Geocoding failed"),
        }

        // Every exit path waits, failures included.
        tokio::time::sleep(self.rate_limit_delay).await;
        result
    }
}

/// Raw Nominatim search hit
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: String,
}
