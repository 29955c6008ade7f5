//! Logging initialization
//!
//! Installs the global `tracing` subscriber: an `EnvFilter` (from `RUST_LOG`,
//! else the configured filter) and a console layer in text or JSON format.

mod logging;

pub use logging::{LogFormat, TelemetryError, init_logging};
