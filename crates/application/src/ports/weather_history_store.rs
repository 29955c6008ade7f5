//! Weather history port
//!
//! Write-through record of successful lookups.

use async_trait::async_trait;
use domain::{entities::WeatherRecord, value_objects::PlaceQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather history persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherHistoryStore: Send + Sync {
    /// Append a record
    async fn record(&self, record: &WeatherRecord) -> Result<(), ApplicationError>;

    /// Most recent record for a city (case-insensitive match)
    async fn latest_for_city(
        &self,
        city: &PlaceQuery,
    ) -> Result<Option<WeatherRecord>, ApplicationError>;
}
