//! Fleet dashboard HTTP presentation layer
//!
//! JSON API over the fleet store plus a headless route preview.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::{cors_layer, create_router, create_router_with_limits};
pub use server::{ShutdownOutcome, serve_with_shutdown};
pub use state::AppState;
