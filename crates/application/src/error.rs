//! Application-level errors

use std::fmt;

use domain::DomainError;
use thiserror::Error;

/// How an upstream provider call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamErrorKind {
    /// Connect failure, timeout, non-success status, or unreadable body
    Transport,
    /// The provider answered but the payload had an unexpected shape
    Format,
    /// Anything else
    Unknown,
}

impl UpstreamErrorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Format => "format",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the geocoding and weather ports
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} error: {message}")]
pub struct UpstreamError {
    pub kind: UpstreamErrorKind,
    pub message: String,
}

impl UpstreamError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: UpstreamErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self {
            kind: UpstreamErrorKind::Format,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            kind: UpstreamErrorKind::Unknown,
            message: message.into(),
        }
    }
}

/// Pipeline stage an upstream failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupStage {
    Geocoding,
    Weather,
}

impl fmt::Display for LookupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geocoding => f.write_str("geocoding"),
            Self::Weather => f.write_str("weather"),
        }
    }
}

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Caller input is malformed
    #[error("{0}")]
    Validation(String),

    /// Valid input, but nothing matches it
    #[error("{0}")]
    NotFound(String),

    /// An upstream provider failed
    #[error("{stage} provider failed ({})", .source.kind)]
    Upstream {
        stage: LookupStage,
        #[source]
        source: UpstreamError,
    },

    /// Resource already exists
    #[error("{0}")]
    Conflict(String),

    /// Credentials rejected
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Tag a port error with the stage that produced it
    pub const fn upstream(stage: LookupStage, source: UpstreamError) -> Self {
        Self::Upstream { stage, source }
    }

    /// Kind of upstream failure, if this is one
    pub const fn upstream_kind(&self) -> Option<UpstreamErrorKind> {
        match self {
            Self::Upstream { source, .. } => Some(source.kind),
            _ => None,
        }
    }
}

/// Every domain error is a rejected input
impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}
