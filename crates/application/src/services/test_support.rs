//! Recording map surfaces for service tests

use std::sync::Arc;

use domain::{LatLng, LatLngBounds, Waypoint};
use parking_lot::Mutex;

use crate::error::ApplicationError;
use crate::ports::{
    MapSurface, MapSurfaceFactory, MarkerId, MarkerSpec, OverlayId, PolylineStyle, TileLayer,
};

/// What a surface currently shows
#[derive(Debug, Clone, Default)]
pub struct RecordedScene {
    pub center: Option<LatLng>,
    pub zoom: u8,
    pub tile_layers: usize,
    pub marker_ids: Vec<MarkerId>,
    pub markers: Vec<MarkerSpec>,
    pub polyline: Option<Vec<LatLng>>,
    pub polylines_added: usize,
    pub fitted: Option<(LatLngBounds, u32)>,
    pub removed: bool,
}

struct RecordingSurface {
    scene: Arc<Mutex<RecordedScene>>,
    next_id: u64,
}

impl MapSurface for RecordingSurface {
    fn add_tile_layer(&mut self, _layer: &TileLayer) {
        self.scene.lock().tile_layers += 1;
    }

    fn add_marker(&mut self, marker: MarkerSpec) -> MarkerId {
        self.next_id += 1;
        let id = MarkerId(self.next_id);
        let mut scene = self.scene.lock();
        scene.marker_ids.push(id);
        scene.markers.push(marker);
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        let mut scene = self.scene.lock();
        if let Some(pos) = scene.marker_ids.iter().position(|m| *m == id) {
            scene.marker_ids.remove(pos);
            scene.markers.remove(pos);
        }
    }

    fn add_polyline(&mut self, points: Vec<LatLng>, _style: &PolylineStyle) -> OverlayId {
        self.next_id += 1;
        let mut scene = self.scene.lock();
        scene.polyline = Some(points);
        scene.polylines_added += 1;
        OverlayId(self.next_id)
    }

    fn remove_polyline(&mut self, _id: OverlayId) {
        self.scene.lock().polyline = None;
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds, padding: u32) {
        self.scene.lock().fitted = Some((bounds, padding));
    }

    fn remove(&mut self) {
        self.scene.lock().removed = true;
    }
}

/// Factory keeping every surface it created
#[derive(Default)]
pub struct RecordingFactory {
    scenes: Mutex<Vec<Arc<Mutex<RecordedScene>>>>,
}

impl RecordingFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn scenes(&self) -> Vec<RecordedScene> {
        self.scenes.lock().iter().map(|s| s.lock().clone()).collect()
    }

    pub fn last(&self) -> RecordedScene {
        self.scenes().pop().unwrap_or_default()
    }

    /// Markers on surfaces that have not been removed
    pub fn live_markers(&self) -> usize {
        self.scenes()
            .iter()
            .filter(|s| !s.removed)
            .map(|s| s.markers.len())
            .sum()
    }
}

impl MapSurfaceFactory for RecordingFactory {
    fn create_surface(
        &self,
        center: LatLng,
        zoom: u8,
    ) -> Result<Box<dyn MapSurface>, ApplicationError> {
        let scene = Arc::new(Mutex::new(RecordedScene {
            center: Some(center),
            zoom,
            ..RecordedScene::default()
        }));
        self.scenes.lock().push(Arc::clone(&scene));
        Ok(Box::new(RecordingSurface { scene, next_id: 0 }))
    }
}

/// `count` named waypoints around lower Manhattan
pub fn waypoints(count: usize) -> Vec<Waypoint> {
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let offset = i as f64 * 0.01;
            Waypoint::new(40.7 + offset, -74.0 - offset)
                .unwrap()
                .with_name(format!("Stop {i}"))
        })
        .collect()
}
