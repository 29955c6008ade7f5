//! MeteorCloud HTTP presentation layer
//!
//! Axum router for the weather lookup and account API under `/api/v1`,
//! its error shaping, and the middleware stack the server binary runs.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{RequestId, RequestIdLayer, ValidatedJson, ValidationError};
pub use routes::{build_app, create_router};
pub use state::AppState;
