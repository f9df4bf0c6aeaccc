//! Adapters implementing application ports

mod map_asset_adapter;
mod routing_adapter;
mod scene_map_adapter;

pub use map_asset_adapter::{HttpMapAssetLoader, StaticMapAssetLoader};
pub use routing_adapter::RoutingAdapter;
pub use scene_map_adapter::{
    MapScene, SceneMapSurfaceFactory, SceneMarker, ScenePolyline, SceneViewport,
};
