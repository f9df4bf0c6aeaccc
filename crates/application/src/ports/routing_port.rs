//! Route calculation port
//!
//! Adapters in the infrastructure layer implement this port on top of a
//! routing provider client.

use async_trait::async_trait;
use domain::{RouteOptions, RouteResult, Waypoint};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for calculating routes through ordered waypoints
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Calculate a route visiting the waypoints in order
    ///
    /// Fewer than two waypoints yields a validation error without contacting
    /// the provider. Non-success responses map to
    /// [`ApplicationError::RoutingService`], network failures to
    /// [`ApplicationError::Transport`].
    async fn calculate_route(
        &self,
        waypoints: &[Waypoint],
        options: &RouteOptions,
    ) -> Result<RouteResult, ApplicationError>;
}
