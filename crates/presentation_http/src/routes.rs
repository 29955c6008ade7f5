//! Route definitions and middleware stack

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// API routes, mounted under `/api/v1`
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/weather", get(handlers::weather::get_weather))
        .route(
            "/weather/history",
            get(handlers::weather::get_weather_history),
        )
        .route("/register", post(handlers::account::register))
        .route("/login", post(handlers::account::login))
        .route("/routes", get(handlers::route_list::list_routes))
}

/// Create the router with all routes and no middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1", api_routes())
        .fallback(handlers::not_found)
        .with_state(state)
}

/// CORS policy: any origin when none are configured
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse()
                .inspect_err(|_| warn!(%origin, "Ignoring unparsable CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Create the router wrapped in the server's middleware
///
/// Outermost first: request ID, tracing, CORS, body size limit.
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let mut app = create_router(state)
        .layer(DefaultBodyLimit::max(config.max_body_size_bytes))
        .layer(RequestBodyLimitLayer::new(config.max_body_size_bytes));

    if config.cors_enabled {
        app = app.layer(cors_layer(config));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new())
}
