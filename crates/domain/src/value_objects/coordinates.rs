//! Resolved coordinates for a place name

use serde::{Deserialize, Serialize};

use super::GeoLocation;
use crate::errors::DomainError;

/// A place resolved by the geocoder: a location plus the provider's canonical name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    location: GeoLocation,
    display_name: String,
}

impl Coordinates {
    /// Create resolved coordinates
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` when latitude or longitude is
    /// out of range.
    pub fn new(
        latitude: f64,
        longitude: f64,
        display_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let location = GeoLocation::new(latitude, longitude)
            .map_err(|e| DomainError::InvalidCoordinates(e.to_string()))?;
        Ok(Self {
            location,
            display_name: display_name.into(),
        })
    }

    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.longitude()
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
