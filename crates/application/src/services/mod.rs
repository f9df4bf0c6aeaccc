//! Application services - Use case implementations

mod fleet_service;
mod map_library;
mod map_renderer;
mod route_view;
#[cfg(test)]
mod test_support;
mod waypoint_samples;

pub use fleet_service::{
    DEFAULT_ALERT_LIMIT, DEFAULT_APP_USAGE_DAYS, DEFAULT_CARBON_DAYS, DEFAULT_LOCATION_LIMIT,
    DashboardSummary, FleetService, SUMMARY_ALERT_WINDOW,
};
pub use map_library::{MapLibrary, MapLibraryHandle};
pub use map_renderer::{MapRenderer, MapRendererConfig, RendererState};
pub use route_view::{ROUTE_ERROR_MESSAGE, RouteCallback, RouteView};
pub use waypoint_samples::{
    DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_RADIUS, DistrictZone, generate_test_waypoints,
    generate_test_waypoints_with, zone_start_location,
};
