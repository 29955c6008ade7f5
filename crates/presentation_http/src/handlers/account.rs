//! Account registration and login handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Body of `POST /register` and `POST /login`
///
/// Missing fields deserialize as empty strings so the account service can
/// report them with its own message. The length caps only bound the work
/// done before that.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[serde(default)]
    #[validate(length(max = 150, message = "Username is too long"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub password: String,
}

/// Response for a successful account operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub status: String,
    pub message: String,
    pub username: String,
}

impl AccountResponse {
    fn success(message: &str, username: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            username: username.to_string(),
        }
    }
}

/// Create a new account
#[instrument(skip(state, req))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let user = state
        .account_service
        .register(&req.username, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse::success(
            "User registered successfully",
            user.username().as_str(),
        )),
    ))
}

/// Check credentials for an existing account
#[instrument(skip(state, req))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let user = state
        .account_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(AccountResponse::success(
        "Login successful",
        user.username().as_str(),
    )))
}
