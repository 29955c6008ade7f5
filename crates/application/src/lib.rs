//! Application layer - Use cases and orchestration
//!
//! Contains the weather lookup pipeline and account use cases together with
//! the port definitions that infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, LookupStage, UpstreamError, UpstreamErrorKind};
pub use ports::*;
pub use services::*;
