//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The place name was empty after trimming
    #[error("City parameter is required")]
    EmptyPlaceQuery,

    /// Units outside of metric/imperial/standard
    #[error("Invalid units parameter. Use 'metric', 'imperial', or 'standard'")]
    InvalidUnits(String),

    /// Language code that cannot be forwarded to the weather provider
    #[error("Invalid lang parameter: {0}")]
    InvalidLanguage(String),

    /// Coordinates outside of the valid range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Username failed validation
    #[error("{0}")]
    InvalidUsername(String),

    /// Password does not satisfy the strength policy
    #[error("Password must be at least 8 characters and contain uppercase, lowercase, numbers, and special characters")]
    WeakPassword,
}
