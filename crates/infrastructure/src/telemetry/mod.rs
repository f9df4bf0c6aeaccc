//! Logging initialization
//!
//! Installs the global `tracing` subscriber for the server and CLI binaries.

mod subscriber;

pub use subscriber::{TelemetryError, build_env_filter, init_logging};
