//! OpenWeather weather integration
//!
//! Client for the OpenWeather current-weather API
//! (<https://openweathermap.org/current>). Responses are turned into
//! display-ready [`domain::WeatherReport`]s for the requested unit system.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
