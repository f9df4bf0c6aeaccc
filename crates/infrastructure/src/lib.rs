//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the Geoapify routing
//! adapter, map asset loaders, the scene-recording map surface and the
//! in-memory fleet store. Also owns configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LogFormat, LoggingConfig, MapConfig, RoutingConfig, ServerConfig};
pub use persistence::{InMemoryFleetStore, SampleFleet, sample_fleet};
pub use telemetry::{TelemetryError, init_logging};
