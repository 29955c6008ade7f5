//! Weather lookup handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use domain::{WeatherRecord, WeatherReport};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::SuccessResponse;
use crate::{error::ApiError, state::AppState};

/// Query string of `GET /api/v1/weather`
#[derive(Debug, Default, Deserialize)]
pub struct WeatherParams {
    #[serde(default)]
    pub city: String,
    pub units: Option<String>,
    pub lang: Option<String>,
}

/// Query string of `GET /api/v1/weather/history`
#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    #[serde(default)]
    pub city: String,
}

fn query_or_bad_request<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    params.map(|Query(p)| p).map_err(|e| {
        debug!(error = %e, "Rejected query string");
        ApiError::BadRequest("Invalid query parameters".to_string())
    })
}

/// Current weather for a city
#[instrument(skip(state, params))]
pub async fn get_weather(
    State(state): State<AppState>,
    params: Result<Query<WeatherParams>, QueryRejection>,
) -> Result<Json<SuccessResponse<WeatherReport>>, ApiError> {
    let params = query_or_bad_request(params)?;
    let city = params.city.trim().to_string();

    let report = state
        .weather_service
        .lookup(&params.city, params.units.as_deref(), params.lang.as_deref())
        .await
        .map_err(|e| ApiError::from_lookup(&city, e))?;

    Ok(Json(SuccessResponse::new(report)))
}

/// Most recent recorded lookup for a city
#[instrument(skip(state, params))]
pub async fn get_weather_history(
    State(state): State<AppState>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<SuccessResponse<WeatherRecord>>, ApiError> {
    let params = query_or_bad_request(params)?;
    let record = state.weather_service.latest_record(&params.city).await?;
    Ok(Json(SuccessResponse::new(record)))
}
