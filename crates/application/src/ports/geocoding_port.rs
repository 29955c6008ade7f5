//! Geocoding port
//!
//! Resolves a place name to coordinates.

use async_trait::async_trait;
use domain::value_objects::{Coordinates, PlaceQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::UpstreamError;

/// Port for place name resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place to its best match
    ///
    /// `Ok(None)` means the provider knows no such place, which is an
    /// ordinary outcome rather than an error.
    async fn resolve(&self, place: &PlaceQuery) -> Result<Option<Coordinates>, UpstreamError>;
}
