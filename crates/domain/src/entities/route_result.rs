//! Route result - the normalized outcome of one route calculation
//!
//! Geometry stays longitude-first exactly as the routing provider delivered
//! it; conversion for drawing happens only when a polyline is rendered.

use serde::{Deserialize, Serialize};

use crate::value_objects::{LonLat, TravelMode};

/// A calculated route, one or more alternative features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub features: Vec<RouteFeature>,
}

impl RouteResult {
    #[must_use]
    pub const fn new(features: Vec<RouteFeature>) -> Self {
        Self { features }
    }

    /// The feature that gets drawn (the first one)
    #[must_use]
    pub fn primary(&self) -> Option<&RouteFeature> {
        self.features.first()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// One routed path through all waypoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteFeature {
    pub mode: TravelMode,
    pub legs: Vec<RouteLeg>,
    pub total_distance_meters: f64,
    pub total_duration_seconds: f64,
    /// Ordered `[longitude, latitude]` positions
    pub geometry: Vec<LonLat>,
}

impl RouteFeature {
    /// Total distance in kilometres
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.total_distance_meters / 1000.0
    }

    /// Total duration in whole minutes, rounded
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn duration_minutes(&self) -> u64 {
        (self.total_duration_seconds / 60.0).round().max(0.0) as u64
    }
}

/// The section of a route between two consecutive waypoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub steps: Vec<RouteStep>,
}

/// A single manoeuvre within a leg
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub distance_meters: Option<f64>,
    pub duration_seconds: Option<f64>,
    pub instruction: Option<String>,
    /// Index into the feature geometry where the step starts
    pub from_index: Option<usize>,
    pub to_index: Option<usize>,
}
