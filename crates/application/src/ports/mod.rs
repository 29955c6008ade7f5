//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod password_hasher_port;
mod user_store;
mod weather_history_store;
mod weather_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use password_hasher_port::MockPasswordHasherPort;
pub use password_hasher_port::{HashedPassword, PasswordHasherPort};
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::UserStore;
#[cfg(test)]
pub use weather_history_store::MockWeatherHistoryStore;
pub use weather_history_store::WeatherHistoryStore;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
