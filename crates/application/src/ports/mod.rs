//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod fleet_store;
mod map_asset_port;
mod map_surface_port;
mod routing_port;

pub use fleet_store::FleetStore;
#[cfg(test)]
pub use fleet_store::MockFleetStore;
#[cfg(test)]
pub use map_asset_port::MockMapAssetLoader;
pub use map_asset_port::{AssetKind, MapAsset, MapAssetLoader, default_map_assets};
#[cfg(test)]
pub use map_surface_port::{MockMapSurface, MockMapSurfaceFactory};
pub use map_surface_port::{
    MapSurface, MapSurfaceFactory, MarkerId, MarkerSpec, MarkerStyle, OverlayId, PolylineStyle,
    TileLayer,
};
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::RoutingPort;
