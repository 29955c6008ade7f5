//! Weather service port
//!
//! Defines the interface for current weather retrieval.

use async_trait::async_trait;
use domain::WeatherReport;
use domain::value_objects::{GeoLocation, Language, Units};
#[cfg(test)]
use mockall::automock;

use crate::error::UpstreamError;

/// Port for current weather lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch display-ready current weather for a location
    ///
    /// `Ok(None)` is returned when the provider answers successfully but has
    /// no conditions for the coordinates.
    async fn fetch(
        &self,
        location: &GeoLocation,
        units: Units,
        lang: &Language,
    ) -> Result<Option<WeatherReport>, UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
