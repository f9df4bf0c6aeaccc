//! Geoapify routing client
//!
//! One GET per calculation against `{base_url}/v1/routing`; no retries and
//! no state carried between calls.

use std::time::Duration;

use async_trait::async_trait;
use domain::{RouteOptions, RouteResult, Waypoint, ensure_routable};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::config::RoutingConfig;
use crate::error::RoutingError;
use crate::models::parse_route_response;
use crate::request::query_params;

/// Trait for route calculation clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Calculate a route through the waypoints, in order
    ///
    /// Fails with [`RoutingError::InvalidWaypoints`] before any network
    /// activity when fewer than two waypoints are given.
    async fn calculate_route(
        &self,
        waypoints: &[Waypoint],
        options: &RouteOptions,
    ) -> Result<RouteResult, RoutingError>;
}

/// Routing client backed by the Geoapify Routing API
#[derive(Debug)]
pub struct GeoapifyRoutingClient {
    client: Client,
    url: String,
    api_key: SecretString,
    timeout_secs: u64,
}

impl GeoapifyRoutingClient {
    /// Create a new routing client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the API key is missing or the
    /// configuration is invalid, and a connection error if the HTTP client
    /// cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::ConfigurationError)?;

        let api_key = match &config.api_key {
            Some(key) if config.is_configured() => key.clone(),
            _ => {
                return Err(RoutingError::ConfigurationError(
                    "routing api_key is not set".to_string(),
                ));
            },
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("fleetdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            url: config.routing_url(),
            api_key,
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl RoutingClient for GeoapifyRoutingClient {
    #[instrument(skip(self, waypoints, options), fields(waypoints = waypoints.len(), mode = %options.mode))]
    async fn calculate_route(
        &self,
        waypoints: &[Waypoint],
        options: &RouteOptions,
    ) -> Result<RouteResult, RoutingError> {
        ensure_routable(waypoints).map_err(|e| RoutingError::InvalidWaypoints(e.to_string()))?;

        let params = query_params(waypoints, options, self.api_key.expose_secret());

        debug!(url = %self.url, "Requesting route");

        let response = self
            .client
            .get(&self.url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            warn!(status = status.as_u16(), %status_text, "Routing API returned an error");
            return Err(RoutingError::ServiceError {
                status: status.as_u16(),
                status_text,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let result = parse_route_response(&body)?;

        if result.is_empty() {
            warn!("Routing API returned no features");
        }

        debug!(features = result.features.len(), "Route calculated");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requires_api_key() {
        let err = GeoapifyRoutingClient::new(&RoutingConfig::default()).unwrap_err();
        assert!(matches!(err, RoutingError::ConfigurationError(_)));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = RoutingConfig {
            timeout_secs: 0,
            ..RoutingConfig::for_testing()
        };
        assert!(matches!(
            GeoapifyRoutingClient::new(&config),
            Err(RoutingError::ConfigurationError(_))
        ));
    }

    #[test]
    fn new_builds_routing_url() {
        let client = GeoapifyRoutingClient::new(&RoutingConfig::for_testing()).unwrap();
        assert_eq!(client.url, "https://api.geoapify.com/v1/routing");
    }

    #[tokio::test]
    async fn single_waypoint_fails_without_request() {
        let config = RoutingConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..RoutingConfig::for_testing()
        };
        let client = GeoapifyRoutingClient::new(&config).unwrap();
        let err = client
            .calculate_route(
                &[Waypoint::new(40.0, -74.0).unwrap()],
                &RouteOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::InvalidWaypoints(_)));
        assert!(err.to_string().contains("at least 2 waypoints required"));
    }
}
