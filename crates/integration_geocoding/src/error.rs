//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding
///
/// A place with no match is not an error; see
/// [`GeocodingClient::geocode`](crate::GeocodingClient::geocode).
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Could not reach the service or read its response body
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Geocoding request timed out")]
    Timeout,

    /// Service answered with a non-success status
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Service rejected the request for exceeding its rate limit
    #[error("Geocoding rate limit exceeded")]
    RateLimitExceeded,

    /// Response body did not have the expected shape
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// HTTP client could not be built
    #[error("Geocoding client initialization failed: {0}")]
    ClientInit(String),
}

impl GeocodingError {
    /// True for failures of the network exchange itself
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::Timeout
                | Self::RequestFailed(_)
                | Self::RateLimitExceeded
        )
    }

    /// True when the service answered with something unparseable
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::ParseError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(GeocodingError::Timeout.is_transport());
        assert!(GeocodingError::RequestFailed("HTTP 503".into()).is_transport());
        assert!(GeocodingError::RateLimitExceeded.is_transport());
        assert!(GeocodingError::ParseError("bad".into()).is_format());

        let init = GeocodingError::ClientInit("tls".into());
        assert!(!init.is_transport());
        assert!(!init.is_format());
    }

    #[test]
    fn display() {
        let err = GeocodingError::ParseError("Invalid latitude".to_string());
        assert_eq!(err.to_string(), "Geocoding parse error: Invalid latitude");
        assert!(GeocodingError::Timeout.to_string().contains("timed out"));
    }
}
