//! Display-ready current weather
//!
//! The weather endpoint hands out text, not numbers: every measurement in a
//! [`WeatherReport`] already carries its unit symbol.

use serde::{Deserialize, Serialize};

use crate::value_objects::Units;

/// Raw numeric readings as reported by the weather provider
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReadings {
    pub temperature: f64,
    pub feels_like: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    pub description: String,
    pub wind_speed: f64,
    pub city_name: String,
    /// ISO 3166 country code
    pub country: String,
}

/// Current weather rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// e.g. `15.2°C`
    pub temperature: String,
    pub feels_like: String,
    /// e.g. `72%`
    pub humidity: String,
    pub description: String,
    /// e.g. `3.6 m/s`
    pub wind_speed: String,
    pub city_name: String,
    pub country: String,
}

impl WeatherReport {
    /// Format provider readings for the requested unit system
    #[must_use]
    pub fn from_readings(readings: WeatherReadings, units: Units) -> Self {
        Self {
            temperature: units.format_temperature(readings.temperature),
            feels_like: units.format_temperature(readings.feels_like),
            humidity: format!("{}%", readings.humidity),
            description: readings.description,
            wind_speed: units.format_wind_speed(readings.wind_speed),
            city_name: readings.city_name,
            country: readings.country,
        }
    }
}
