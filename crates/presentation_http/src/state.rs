//! Application state shared across handlers

use std::sync::Arc;

use application::{FleetService, MapLibrary, RoutingPort};
use infrastructure::MapConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Fleet record queries
    pub fleet: Arc<FleetService>,
    /// Routing service; `None` when no API key is configured
    pub routing: Option<Arc<dyn RoutingPort>>,
    /// Process-wide map library shared by route previews
    pub map_library: Arc<MapLibrary>,
    pub map: Arc<MapConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("routing_configured", &self.routing.is_some())
            .field("map_library_refs", &self.map_library.ref_count())
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        fleet: Arc<FleetService>,
        routing: Option<Arc<dyn RoutingPort>>,
        map_library: Arc<MapLibrary>,
        map: MapConfig,
    ) -> Self {
        Self {
            fleet,
            routing,
            map_library,
            map: Arc::new(map),
        }
    }
}
