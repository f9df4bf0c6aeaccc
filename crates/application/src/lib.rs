//! Application layer - Use cases and orchestration
//!
//! Contains the route view controller with its map renderer and map library
//! lifecycle, the fleet query service, and the port definitions the
//! infrastructure layer implements.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
