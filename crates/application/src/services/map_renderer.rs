//! Map renderer
//!
//! Owns one map session: the surface, its waypoint markers and the current
//! route line. Route geometry arrives longitude-first and is converted to
//! latitude-first here, once, right before it is drawn.
//!
//! ```text
//! Uninitialized -> LibraryLoading -> Ready <-> Calculating
//!        any state -> Unmounted
//! ```

use std::sync::Arc;

use domain::{LatLng, LatLngBounds, RouteResult, Waypoint};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::ApplicationError;
use crate::ports::{
    MapSurface, MapSurfaceFactory, MarkerId, MarkerSpec, MarkerStyle, OverlayId, PolylineStyle,
    TileLayer,
};
use crate::services::map_library::MapLibraryHandle;

/// Drawing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRendererConfig {
    pub default_zoom: u8,
    /// Padding in pixels when fitting the viewport to a route
    pub fit_padding: u32,
    pub route_style: PolylineStyle,
    pub tile_layer: TileLayer,
}

impl Default for MapRendererConfig {
    fn default() -> Self {
        Self {
            default_zoom: 13,
            fit_padding: 30,
            route_style: PolylineStyle::default(),
            tile_layer: TileLayer::default(),
        }
    }
}

/// Lifecycle state of a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererState {
    Uninitialized,
    LibraryLoading,
    Ready,
    Calculating,
    Unmounted,
}

struct MapSession {
    surface: Box<dyn MapSurface>,
    markers: Vec<MarkerId>,
    route_line: Option<OverlayId>,
}

impl MapSession {
    fn release(mut self) {
        if let Some(line) = self.route_line.take() {
            self.surface.remove_polyline(line);
        }
        for marker in self.markers.drain(..) {
            self.surface.remove_marker(marker);
        }
        self.surface.remove();
    }
}

/// Map surface lifecycle and drawing for one view
pub struct MapRenderer {
    config: MapRendererConfig,
    factory: Arc<dyn MapSurfaceFactory>,
    library: Option<MapLibraryHandle>,
    library_error: Option<String>,
    state: RendererState,
    session: Option<MapSession>,
}

impl std::fmt::Debug for MapRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapRenderer")
            .field("state", &self.state)
            .field("library_ready", &self.library.is_some())
            .field("library_error", &self.library_error)
            .field("markers", &self.marker_count())
            .field("has_route_line", &self.has_route_line())
            .finish_non_exhaustive()
    }
}

impl MapRenderer {
    pub fn new(config: MapRendererConfig, factory: Arc<dyn MapSurfaceFactory>) -> Self {
        Self {
            config,
            factory,
            library: None,
            library_error: None,
            state: RendererState::Uninitialized,
            session: None,
        }
    }

    pub const fn state(&self) -> RendererState {
        self.state
    }

    pub const fn config(&self) -> &MapRendererConfig {
        &self.config
    }

    /// Whether the library is loaded and the renderer can draw
    pub const fn is_library_ready(&self) -> bool {
        self.library.is_some() && !matches!(self.state, RendererState::Unmounted)
    }

    pub fn library_error(&self) -> Option<&str> {
        self.library_error.as_deref()
    }

    pub const fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Live waypoint markers on the current surface
    pub fn marker_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.markers.len())
    }

    pub fn has_route_line(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.route_line.is_some())
    }

    /// Enter `LibraryLoading`; returns false if a load was already started
    pub fn begin_library_load(&mut self) -> bool {
        if self.state != RendererState::Uninitialized {
            return false;
        }
        self.state = RendererState::LibraryLoading;
        true
    }

    /// Record the outcome of a library load
    ///
    /// A failure is logged and kept; without a library handle the renderer
    /// never draws. The renderer returns to `Uninitialized` so a later mount
    /// can retry.
    pub fn library_loaded(&mut self, result: Result<MapLibraryHandle, ApplicationError>) {
        if self.state == RendererState::Unmounted {
            return;
        }
        match result {
            Ok(handle) => {
                self.library = Some(handle);
                self.library_error = None;
                self.state = RendererState::Ready;
                debug!("Renderer ready");
            },
            Err(e) => {
                error!(error = %e, "Failed to load map library");
                self.library_error = Some(e.to_string());
                self.state = RendererState::Uninitialized;
            },
        }
    }

    /// Replace the session with a fresh surface for `waypoints`
    ///
    /// Centres on the first waypoint at the default zoom, adds the tile layer
    /// and one marker per waypoint, then enters `Calculating`. Returns false
    /// without touching anything when the library is missing or fewer than
    /// two waypoints are given.
    pub fn prepare_session(&mut self, waypoints: &[Waypoint]) -> bool {
        if !self.is_library_ready() || waypoints.len() < 2 {
            return false;
        }

        self.release_session();

        let center = waypoints[0].to_lat_lng();
        let mut surface = match self.factory.create_surface(center, self.config.default_zoom) {
            Ok(surface) => surface,
            Err(e) => {
                warn!(error = %e, "Could not create map surface");
                return false;
            },
        };

        surface.add_tile_layer(&self.config.tile_layer);

        let count = waypoints.len();
        let markers = waypoints
            .iter()
            .enumerate()
            .map(|(index, waypoint)| {
                surface.add_marker(MarkerSpec {
                    position: waypoint.to_lat_lng(),
                    style: MarkerStyle::for_position(index, count),
                    popup: waypoint.name().map(str::to_string),
                })
            })
            .collect();

        self.session = Some(MapSession {
            surface,
            markers,
            route_line: None,
        });
        self.state = RendererState::Calculating;
        debug!(markers = count, "Map session prepared");
        true
    }

    /// Start another calculation on the existing surface
    pub fn begin_recalculation(&mut self) -> bool {
        if !self.is_library_ready() || self.session.is_none() {
            return false;
        }
        self.state = RendererState::Calculating;
        true
    }

    /// Draw the primary feature of a result and fit the viewport to it
    ///
    /// Any previous route line is removed first. A result without features
    /// leaves the surface without a route line.
    pub fn draw_route(&mut self, result: &RouteResult) {
        if !self.is_library_ready() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        self.state = RendererState::Ready;

        if let Some(line) = session.route_line.take() {
            session.surface.remove_polyline(line);
        }

        let Some(feature) = result.primary() else {
            debug!("Route has no features, nothing to draw");
            return;
        };

        let points: Vec<LatLng> = feature.geometry.iter().map(|p| p.to_lat_lng()).collect();
        let bounds = LatLngBounds::from_points(&points);

        session.route_line = Some(
            session
                .surface
                .add_polyline(points, &self.config.route_style),
        );

        if let Some(bounds) = bounds {
            session.surface.fit_bounds(bounds, self.config.fit_padding);
        }
    }

    /// A calculation failed; the surface keeps whatever it shows
    pub fn route_failed(&mut self) {
        if self.state == RendererState::Calculating {
            self.state = RendererState::Ready;
        }
    }

    /// Remove the route line, markers and surface
    pub fn release_session(&mut self) {
        if let Some(session) = self.session.take() {
            session.release();
            if self.state == RendererState::Calculating {
                self.state = RendererState::Ready;
            }
        }
    }

    /// Release the session and the library handle; terminal
    pub fn unmount(&mut self) {
        self.release_session();
        self.library = None;
        self.state = RendererState::Unmounted;
    }
}
