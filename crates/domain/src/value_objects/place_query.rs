//! Place name query value object

use std::fmt;

use serde::Serialize;

use crate::errors::DomainError;

/// A trimmed, non-empty free-text place name as entered by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlaceQuery(String);

impl PlaceQuery {
    /// Build a query from raw input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyPlaceQuery` if nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyPlaceQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the place name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaceQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
