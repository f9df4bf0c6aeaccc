//! Domain layer for the fleet dashboard
//!
//! Contains the routing value objects (waypoints, options, coordinates),
//! the fleet records served by the dashboard API, and domain errors.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
