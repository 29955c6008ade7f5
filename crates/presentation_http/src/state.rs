//! Application state shared across handlers

use std::sync::Arc;

use application::{AccountService, WeatherService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Geocode-then-fetch weather lookups and lookup history
    pub weather_service: Arc<WeatherService>,
    /// Registration and login
    pub account_service: Arc<AccountService>,
}

impl AppState {
    #[must_use]
    pub const fn new(
        weather_service: Arc<WeatherService>,
        account_service: Arc<AccountService>,
    ) -> Self {
        Self {
            weather_service,
            account_service,
        }
    }
}
