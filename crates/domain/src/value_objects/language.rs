//! Response language value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

const MAX_LANGUAGE_LEN: usize = 16;

/// Language code forwarded to the weather provider (e.g. `en`, `de`, `zh_cn`, `pt-BR`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Validate a language code
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLanguage` for empty, overlong, or
    /// non-`[A-Za-z0-9_-]` input.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let code = raw.trim();
        let well_formed = !code.is_empty()
            && code.len() <= MAX_LANGUAGE_LEN
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !well_formed {
            return Err(DomainError::InvalidLanguage(raw.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    /// Parse an optional caller-supplied value, falling back to English
    /// when it is missing or blank
    pub fn from_optional(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(code) => Self::new(code),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_provider_codes() {
        for code in ["en", "de", "zh_cn", "pt-BR"] {
            assert_eq!(Language::new(code).expect("valid").as_str(), code);
        }
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(Language::default().as_str(), "en");
        assert_eq!(Language::from_optional(None).expect("default").as_str(), "en");
        assert_eq!(Language::from_optional(Some("  ")).expect("default").as_str(), "en");
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(Language::new("en&appid=x").is_err());
        assert!(Language::new("").is_err());
        assert!(Language::new(&"x".repeat(17)).is_err());
    }
}
