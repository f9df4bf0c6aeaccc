//! Routing integration for the fleet dashboard
//!
//! Calculates driving, truck, cycling and walking routes through an ordered
//! list of waypoints via the [Geoapify Routing API](https://apidocs.geoapify.com/docs/routing/).
//!
//! # Architecture
//!
//! [`RoutingClient`] defines the interface, implemented by
//! [`GeoapifyRoutingClient`]. The provider's GeoJSON response is validated at
//! the boundary and converted into the domain [`RouteResult`](domain::RouteResult);
//! nothing of the wire schema leaks past this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::{RouteOptions, Waypoint};
//! use integration_routing::{GeoapifyRoutingClient, RoutingClient, RoutingConfig};
//!
//! let client = GeoapifyRoutingClient::new(&RoutingConfig::with_api_key("..."))?;
//! let waypoints = vec![Waypoint::new(40.7128, -74.0060)?, Waypoint::new(40.73, -73.99)?];
//! let route = client.calculate_route(&waypoints, &RouteOptions::default()).await?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod request;

pub use client::{GeoapifyRoutingClient, RoutingClient};
pub use config::RoutingConfig;
pub use error::RoutingError;
pub use request::{format_waypoints, query_params};
