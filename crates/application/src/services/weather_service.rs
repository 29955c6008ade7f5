//! Weather lookup service
//!
//! Runs the lookup pipeline: validate the caller's input, resolve the city to
//! coordinates, fetch current weather for them. Each request runs the whole
//! chain on its own. Nothing is retried and nothing is cached between
//! requests; the only side effect is an optional history record written
//! after a successful lookup.

use std::{fmt, sync::Arc};

use domain::{
    WeatherRecord, WeatherReport,
    value_objects::{Language, PlaceQuery, Units},
};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{ApplicationError, LookupStage},
    ports::{GeocodingPort, WeatherHistoryStore, WeatherPort},
};

/// Validated lookup parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: PlaceQuery,
    pub units: Units,
    pub lang: Language,
}

impl WeatherQuery {
    /// Validate raw caller input
    ///
    /// Missing units default to metric and a missing language to English.
    /// A present but unknown units value is rejected, never coerced.
    pub fn parse(
        raw_city: &str,
        raw_units: Option<&str>,
        raw_lang: Option<&str>,
    ) -> Result<Self, ApplicationError> {
        let city = PlaceQuery::new(raw_city)?;
        let units = match raw_units {
            Some(raw) => raw.parse::<Units>()?,
            None => Units::default(),
        };
        let lang = Language::from_optional(raw_lang)?;
        Ok(Self { city, units, lang })
    }
}

/// Weather lookup orchestrator
pub struct WeatherService {
    geocoding: Arc<dyn GeocodingPort>,
    weather: Arc<dyn WeatherPort>,
    history: Option<Arc<dyn WeatherHistoryStore>>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("has_history", &self.history.is_some())
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(geocoding: Arc<dyn GeocodingPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            geocoding,
            weather,
            history: None,
        }
    }

    /// Record every successful lookup in the given store
    #[must_use]
    pub fn with_history(mut self, history: Arc<dyn WeatherHistoryStore>) -> Self {
        self.history = Some(history);
        self
    }

    /// Look up current weather for a city
    ///
    /// # Errors
    ///
    /// - `Validation` for an empty city, unknown units, or a malformed language
    /// - `NotFound` when the city cannot be resolved or the provider has no
    ///   conditions for it
    /// - `Upstream` tagged with the failing stage when a provider call fails
    #[instrument(skip(self, raw_city), fields(city = %raw_city.trim()))]
    pub async fn lookup(
        &self,
        raw_city: &str,
        raw_units: Option<&str>,
        raw_lang: Option<&str>,
    ) -> Result<WeatherReport, ApplicationError> {
        let query = WeatherQuery::parse(raw_city, raw_units, raw_lang)?;
        self.lookup_query(&query).await
    }

    /// Look up current weather for already validated parameters
    pub async fn lookup_query(&self, query: &WeatherQuery) -> Result<WeatherReport, ApplicationError> {
        let city = &query.city;

        let place = match self.geocoding.resolve(city).await {
            Ok(Some(place)) => place,
            Ok(None) => {
                info!(%city, "No geocoding match");
                return Err(ApplicationError::NotFound(format!(
                    "Could not find coordinates for {city}"
                )));
            },
            Err(e) => {
                warn!(%city, kind = %e.kind, error = %e.message, "Geocoding failed");
                return Err(ApplicationError::upstream(LookupStage::Geocoding, e));
            },
        };

        debug!(
            %city,
            lat = place.latitude(),
            lon = place.longitude(),
            display_name = place.display_name(),
            "Resolved city"
        );

        let report = match self
            .weather
            .fetch(&place.location(), query.units, &query.lang)
            .await
        {
            Ok(Some(report)) => report,
            Ok(None) => {
                warn!(%city, "Weather provider returned no conditions");
                return Err(ApplicationError::NotFound(format!(
                    "Weather data not found for {city}"
                )));
            },
            Err(e) => {
                warn!(%city, kind = %e.kind, error = %e.message, "Weather fetch failed");
                return Err(ApplicationError::upstream(LookupStage::Weather, e));
            },
        };

        self.record(city, &report).await;

        info!(%city, units = %query.units, "Weather lookup succeeded");
        Ok(report)
    }

    /// Most recent recorded lookup for a city
    #[instrument(skip(self, raw_city), fields(city = %raw_city.trim()))]
    pub async fn latest_record(&self, raw_city: &str) -> Result<WeatherRecord, ApplicationError> {
        let city = PlaceQuery::new(raw_city)?;
        let history = self.history.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("weather history is not enabled".to_string())
        })?;

        history
            .latest_for_city(&city)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("No weather history for {city}")))
    }

    async fn record(&self, city: &PlaceQuery, report: &WeatherReport) {
        let Some(history) = &self.history else {
            return;
        };
        if let Err(e) = history.record(&WeatherRecord::capture(city, report)).await {
            warn!(%city, error = %e, "Failed to record weather history");
        }
    }
}
