//! HTTP request handlers

pub mod account;
pub mod health;
pub mod route_list;
pub mod weather;

use axum::http::Uri;
use serde::Serialize;

use crate::error::ApiError;

/// Envelope for successful data responses
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T> {
    /// Always `"success"`
    pub status: &'static str,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub const fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Fallback for paths no route matches
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "No route matched");
    ApiError::NotFound("Resource not found".to_string())
}
