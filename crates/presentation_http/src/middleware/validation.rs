//! Request body validation
//!
//! [`ValidatedJson`] deserializes a JSON body and runs its `validator`
//! rules. Both kinds of failure answer 400 with the regular error body,
//! except bodies over the size limit, which answer 413.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// Message for bodies that are not the expected JSON document
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Message for bodies over the configured size limit
pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Body extraction failure
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Missing content type, malformed JSON, or wrong field types
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] JsonRejection),
    /// JSON was well-formed but broke a field rule
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::JsonError(rejection)
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                debug!(error = %rejection, "Request body over size limit");
                Self::PayloadTooLarge(BODY_TOO_LARGE_MESSAGE.to_string())
            },
            ValidationError::JsonError(rejection) => {
                debug!(error = %rejection, "Rejected request body");
                Self::BadRequest(INVALID_BODY_MESSAGE.to_string())
            },
            ValidationError::ValidationFailed(msg) => Self::BadRequest(msg),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

/// First rule message found, falling back to the rule code
fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .find_map(|(field, errs)| errs.first().map(|e| (field, e)))
        .map_or_else(
            || INVALID_BODY_MESSAGE.to_string(),
            |(field, e)| {
                e.message
                    .as_ref()
                    .map_or_else(|| format!("{field}: {}", e.code), ToString::to_string)
            },
        )
}

/// JSON extractor that also enforces `validator` rules
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|e| ValidationError::ValidationFailed(first_message(&e)))?;
        Ok(Self(value))
    }
}
