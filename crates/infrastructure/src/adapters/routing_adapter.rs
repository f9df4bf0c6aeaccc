//! Routing adapter - Implements RoutingPort using integration_routing

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::{DomainError, RouteOptions, RouteResult, Waypoint};
use integration_routing::{GeoapifyRoutingClient, RoutingClient, RoutingConfig, RoutingError};
use tracing::{debug, instrument, warn};

/// Adapter for the Geoapify routing service
pub struct RoutingAdapter {
    client: Arc<dyn RoutingClient>,
}

impl std::fmt::Debug for RoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingAdapter")
            .field("client", &"dyn RoutingClient")
            .finish()
    }
}

impl RoutingAdapter {
    /// Wrap an existing routing client
    pub fn new(client: impl RoutingClient + 'static) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Build a Geoapify-backed adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the API key is missing or
    /// the configuration is invalid.
    pub fn from_config(config: &RoutingConfig) -> Result<Self, ApplicationError> {
        let client = GeoapifyRoutingClient::new(config).map_err(map_routing_error)?;
        Ok(Self::new(client))
    }
}

fn map_routing_error(error: RoutingError) -> ApplicationError {
    match error {
        RoutingError::InvalidWaypoints(msg) => DomainError::ValidationError(msg).into(),
        RoutingError::ServiceError {
            status,
            status_text,
        } => ApplicationError::RoutingService {
            status,
            status_text,
        },
        e @ (RoutingError::ConnectionFailed(_) | RoutingError::Timeout { .. }) => {
            ApplicationError::Transport(e.to_string())
        },
        RoutingError::ParseError(msg) => {
            ApplicationError::ExternalService(format!("Invalid routing response: {msg}"))
        },
        RoutingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
    }
}

#[async_trait]
impl RoutingPort for RoutingAdapter {
    #[instrument(skip(self, waypoints, options), fields(waypoints = waypoints.len(), mode = %options.mode.as_str()))]
    async fn calculate_route(
        &self,
        waypoints: &[Waypoint],
        options: &RouteOptions,
    ) -> Result<RouteResult, ApplicationError> {
        match self.client.calculate_route(waypoints, options).await {
            Ok(result) => {
                debug!(features = result.features.len(), "Route calculated");
                Ok(result)
            },
            Err(e) => {
                warn!(error = %e, "Route calculation failed");
                Err(map_routing_error(e))
            },
        }
    }
}
