//! Application services - Use case implementations

mod account_service;
mod weather_service;

pub use account_service::AccountService;
pub use weather_service::{WeatherQuery, WeatherService};
