//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod password_hasher;
mod weather_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use password_hasher::Argon2PasswordHasher;
pub use weather_adapter::WeatherAdapter;
