//! Map surface port
//!
//! A map surface is one interactive map instance: a viewport plus the layers,
//! markers and overlays drawn on it. All positions are latitude-first.

use domain::{LatLng, LatLngBounds};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Handle of a marker placed on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

/// Handle of a polyline overlay drawn on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlayId(pub u64);

/// Visual role of a waypoint marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    /// First or last waypoint
    Endpoint,
    /// Intermediate stop
    Via,
}

impl MarkerStyle {
    /// Fill colour of the marker dot
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Endpoint => "red",
            Self::Via => "blue",
        }
    }

    /// Style for the waypoint at `index` in a list of `count`
    #[must_use]
    pub const fn for_position(index: usize, count: usize) -> Self {
        if index == 0 || index + 1 == count {
            Self::Endpoint
        } else {
            Self::Via
        }
    }
}

/// A marker to place on a surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub position: LatLng,
    pub style: MarkerStyle,
    /// Popup text, bound only for named waypoints
    pub popup: Option<String>,
}

/// Stroke style of a route line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            color: "#4CAF50".to_string(),
            weight: 5,
            opacity: 0.7,
        }
    }
}

/// Raster tile source added to every new surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
        }
    }
}

/// One live map instance
#[cfg_attr(test, automock)]
pub trait MapSurface: Send {
    fn add_tile_layer(&mut self, layer: &TileLayer);

    fn add_marker(&mut self, marker: MarkerSpec) -> MarkerId;

    fn remove_marker(&mut self, id: MarkerId);

    fn add_polyline(&mut self, points: Vec<LatLng>, style: &PolylineStyle) -> OverlayId;

    fn remove_polyline(&mut self, id: OverlayId);

    /// Move the viewport so the bounds are visible, with padding in pixels
    fn fit_bounds(&mut self, bounds: LatLngBounds, padding: u32);

    /// Tear the surface down; no calls are made on it afterwards
    fn remove(&mut self);
}

/// Creates map surfaces once the map library is available
#[cfg_attr(test, automock)]
pub trait MapSurfaceFactory: Send + Sync {
    /// Create a surface centred on `center` at `zoom`
    fn create_surface(
        &self,
        center: LatLng,
        zoom: u8,
    ) -> Result<Box<dyn MapSurface>, ApplicationError>;
}
