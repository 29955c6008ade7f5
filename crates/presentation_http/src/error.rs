//! API error handling
//!
//! Every error leaves the server as `{"status": "error", "error": <message>}`.
//! Internal details (provider bodies, SQL errors, URLs) are logged, never
//! returned.

use application::{ApplicationError, LookupStage};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Generic message for unexpected failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// The message is what the caller sees; log the cause before building this
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `"error"`
    pub status: String,
    /// Human-readable message
    pub error: String,
}

impl ApiError {
    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::PayloadTooLarge(msg)
            | Self::Internal(msg) => msg,
        }
    }

    /// Map a weather lookup failure, keeping the reference responses
    ///
    /// Provider failures surface as 404 with the same message as a missing
    /// match for that stage; unexpected failures become a generic 500.
    #[must_use]
    pub fn from_lookup(city: &str, err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::BadRequest(msg),
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::Upstream {
                stage: LookupStage::Geocoding,
                ..
            } => Self::NotFound(format!("Could not find coordinates for {city}")),
            ApplicationError::Upstream {
                stage: LookupStage::Weather,
                ..
            } => Self::NotFound(format!("Weather data not found for {city}")),
            other => {
                error!(error = %other, "Weather lookup failed unexpectedly");
                Self::Internal("Failed to fetch weather data".to_string())
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            status: "error".to_string(),
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::BadRequest(msg),
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::Conflict(msg) => Self::Conflict(msg),
            ApplicationError::NotAuthorized(msg) => Self::Unauthorized(msg),
            other @ (ApplicationError::Upstream { .. }
            | ApplicationError::Configuration(_)
            | ApplicationError::Internal(_)) => {
                error!(error = %other, "Request failed");
                Self::Internal(INTERNAL_ERROR_MESSAGE.to_string())
            },
        }
    }
}
