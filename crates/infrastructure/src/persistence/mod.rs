//! Persistence module
//!
//! In-memory storage for fleet records, optionally seeded with demo data.

mod in_memory_fleet_store;
pub mod sample_data;

pub use in_memory_fleet_store::InMemoryFleetStore;
pub use sample_data::{SampleFleet, sample_fleet};
