//! Account username value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Minimum username length in characters
pub const MIN_USERNAME_LEN: usize = 3;

/// A trimmed username of at least three characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validate and normalize a username
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUsername` when the trimmed value is
    /// shorter than three characters.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_USERNAME_LEN {
            return Err(DomainError::InvalidUsername(
                "Username must be at least 3 characters".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
