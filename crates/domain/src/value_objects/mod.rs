//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod geo_location;
mod route_options;
mod waypoint;

pub use coordinates::{LatLng, LatLngBounds, LonLat};
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use route_options::{RouteOptions, TrafficModel, TravelMode};
pub use waypoint::{MIN_ROUTE_WAYPOINTS, Waypoint, ensure_routable};
