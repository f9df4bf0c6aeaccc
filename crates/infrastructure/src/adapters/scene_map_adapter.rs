//! Scene-recording map surfaces
//!
//! A headless `MapSurface` that keeps what a browser map would show as plain
//! data. The HTTP route preview returns the scene as JSON.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{
    MapSurface, MapSurfaceFactory, MarkerId, MarkerSpec, OverlayId, PolylineStyle, TileLayer,
};
use domain::{LatLng, LatLngBounds};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A marker placed on the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneMarker {
    pub id: MarkerId,
    pub position: LatLng,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<String>,
}

/// The route line, latitude-first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePolyline {
    pub id: OverlayId,
    pub points: Vec<LatLng>,
    pub style: PolylineStyle,
}

/// Last viewport fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneViewport {
    pub bounds: LatLngBounds,
    pub padding: u32,
}

/// Everything a single surface currently displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapScene {
    pub center: LatLng,
    pub zoom: u8,
    pub tile_layer: Option<TileLayer>,
    pub markers: Vec<SceneMarker>,
    pub polyline: Option<ScenePolyline>,
    pub viewport: Option<SceneViewport>,
    pub removed: bool,
}

impl MapScene {
    const fn new(center: LatLng, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            tile_layer: None,
            markers: Vec::new(),
            polyline: None,
            viewport: None,
            removed: false,
        }
    }
}

type SharedScene = Arc<Mutex<MapScene>>;

struct SceneMapSurface {
    scene: SharedScene,
    next_id: u64,
}

impl SceneMapSurface {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MapSurface for SceneMapSurface {
    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.scene.lock().tile_layer = Some(layer.clone());
    }

    fn add_marker(&mut self, marker: MarkerSpec) -> MarkerId {
        let id = MarkerId(self.next_id());
        self.scene.lock().markers.push(SceneMarker {
            id,
            position: marker.position,
            color: marker.style.color().to_string(),
            popup: marker.popup,
        });
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.scene.lock().markers.retain(|m| m.id != id);
    }

    fn add_polyline(&mut self, points: Vec<LatLng>, style: &PolylineStyle) -> OverlayId {
        let id = OverlayId(self.next_id());
        trace!(points = points.len(), "Polyline added");
        self.scene.lock().polyline = Some(ScenePolyline {
            id,
            points,
            style: style.clone(),
        });
        id
    }

    fn remove_polyline(&mut self, id: OverlayId) {
        let mut scene = self.scene.lock();
        if scene.polyline.as_ref().is_some_and(|p| p.id == id) {
            scene.polyline = None;
        }
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds, padding: u32) {
        self.scene.lock().viewport = Some(SceneViewport { bounds, padding });
    }

    fn remove(&mut self) {
        let mut scene = self.scene.lock();
        scene.markers.clear();
        scene.polyline = None;
        scene.removed = true;
    }
}

/// Factory handing out scene-recording surfaces
#[derive(Debug, Clone, Default)]
pub struct SceneMapSurfaceFactory {
    scenes: Arc<Mutex<Vec<SharedScene>>>,
}

impl SceneMapSurfaceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the newest surface that has not been removed
    pub fn current_scene(&self) -> Option<MapScene> {
        self.scenes
            .lock()
            .iter()
            .rev()
            .map(|scene| scene.lock().clone())
            .find(|scene| !scene.removed)
    }

    /// Number of surfaces created so far
    pub fn surfaces_created(&self) -> usize {
        self.scenes.lock().len()
    }
}

impl MapSurfaceFactory for SceneMapSurfaceFactory {
    fn create_surface(
        &self,
        center: LatLng,
        zoom: u8,
    ) -> Result<Box<dyn MapSurface>, ApplicationError> {
        let scene = Arc::new(Mutex::new(MapScene::new(center, zoom)));
        self.scenes.lock().push(Arc::clone(&scene));
        Ok(Box::new(SceneMapSurface { scene, next_id: 0 }))
    }
}
