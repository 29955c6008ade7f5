//! Persistence module
//!
//! SQLite-based storage for user accounts and weather history.

pub mod connection;
pub mod migrations;
mod user_store;
mod weather_history_store;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use user_store::SqliteUserStore;
pub use weather_history_store::SqliteWeatherHistoryStore;
