//! OpenWeather response models
//!
//! Only the fields MeteorCloud reads are modelled; everything else in the
//! payload is ignored.

use domain::WeatherReadings;
use serde::Deserialize;

/// Response of `GET /weather`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: MainReadings,
    pub weather: Vec<Condition>,
    pub wind: Wind,
    pub name: String,
    pub sys: SystemInfo,
}

/// `main` block
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
}

/// `wind` block
#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// `sys` block
#[derive(Debug, Clone, Deserialize)]
pub struct SystemInfo {
    pub country: String,
}

impl CurrentWeatherResponse {
    /// Extract readings, or `None` when the provider listed no conditions
    pub fn into_readings(self) -> Option<WeatherReadings> {
        let condition = self.weather.into_iter().next()?;
        Some(WeatherReadings {
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            description: condition.description,
            wind_speed: self.wind.speed,
            city_name: self.name,
            country: self.sys.country,
        })
    }
}
