//! Weather history entry
//!
//! One row per successful lookup, written after the fact. Records are never
//! consulted to answer a lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::WeatherReport;
use crate::value_objects::PlaceQuery;

/// A snapshot of a lookup result for a city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    city: String,
    temperature: String,
    condition: String,
    recorded_at: DateTime<Utc>,
}

impl WeatherRecord {
    /// Capture a report for the city the caller asked about
    #[must_use]
    pub fn capture(city: &PlaceQuery, report: &WeatherReport) -> Self {
        Self {
            city: city.as_str().to_string(),
            temperature: report.temperature.clone(),
            condition: report.description.clone(),
            recorded_at: Utc::now(),
        }
    }

    /// Restore a record from storage
    #[must_use]
    pub const fn restore(
        city: String,
        temperature: String,
        condition: String,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            city,
            temperature,
            condition,
            recorded_at,
        }
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn temperature(&self) -> &str {
        &self.temperature
    }

    #[must_use]
    pub fn condition(&self) -> &str {
        &self.condition
    }

    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
