//! Nominatim geocoding integration for MeteorCloud
//!
//! Resolves free-text place names to coordinates via the
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org) search API.
//!
//! # Rate limiting
//!
//! Nominatim's usage policy allows at most one request per second. Every
//! [`GeocodingClient::geocode`] call on [`NominatimGeocodingClient`] waits for
//! the configured delay (one second by default) before it returns, whatever
//! the outcome. The delay is per call; concurrent callers do not queue
//! behind each other.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! if let Some(place) = client.geocode("London").await? {
//!     println!("{} -> {}, {}", place.display_name(), place.latitude(), place.longitude());
//! }
//! ```

mod client;
mod config;
mod error;

pub use client::{GeocodingClient, NominatimGeocodingClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
