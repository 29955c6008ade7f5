//! Measurement system value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Unit system requested from the weather provider
///
/// The string forms match the provider's `units` query parameter exactly and
/// are parsed case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius and meters per second
    #[default]
    Metric,
    /// Fahrenheit and miles per hour
    Imperial,
    /// Kelvin and meters per second
    Standard,
}

impl Units {
    /// Wire form used in query strings
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Standard => "standard",
        }
    }

    /// Suffix appended to temperature values
    #[must_use]
    pub const fn temperature_symbol(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
            Self::Standard => " K",
        }
    }

    /// Suffix appended to wind speed values
    #[must_use]
    pub const fn wind_speed_symbol(&self) -> &'static str {
        match self {
            Self::Imperial => "mph",
            Self::Metric | Self::Standard => "m/s",
        }
    }

    /// Render a temperature, e.g. `15.2°C` or `288.4 K`
    #[must_use]
    pub fn format_temperature(&self, value: f64) -> String {
        format!("{value}{}", self.temperature_symbol())
    }

    /// Render a wind speed, e.g. `3.6 m/s`
    #[must_use]
    pub fn format_wind_speed(&self, value: f64) -> String {
        format!("{value} {}", self.wind_speed_symbol())
    }

    /// All accepted unit systems
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Metric, Self::Imperial, Self::Standard]
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            "standard" => Ok(Self::Standard),
            other => Err(DomainError::InvalidUnits(other.to_string())),
        }
    }
}
