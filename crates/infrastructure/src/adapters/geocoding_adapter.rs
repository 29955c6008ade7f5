//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::{error::UpstreamError, ports::GeocodingPort};
use async_trait::async_trait;
use domain::value_objects::{Coordinates, PlaceQuery};
use integration_geocoding::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};
use tracing::{instrument, warn};

/// Adapter for geocoding via Nominatim
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl GeocodingAdapter {
    /// Create an adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &NominatimConfig) -> Result<Self, UpstreamError> {
        let client = NominatimGeocodingClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Classify a client error for the application layer
    fn map_error(err: GeocodingError) -> UpstreamError {
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
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self), fields(place = %place))]
    async fn resolve(&self, place: &PlaceQuery) -> Result<Option<Coordinates>, UpstreamError> {
        self.client.geocode(place.as_str()).await.map_err(|e| {
            let mapped = Self::map_error(e);
            warn!(kind = %mapped.kind, error = %mapped.message, "Geocoding failed");
            mapped
        })
    }
}
