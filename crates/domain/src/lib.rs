//! Domain layer for MeteorCloud
//!
//! Contains the weather and account vocabulary: value objects, entities,
//! and domain errors. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
