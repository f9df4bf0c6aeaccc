//! Wire schema of the routing API response
//!
//! The response is a GeoJSON `FeatureCollection`. Only the fields the
//! dashboard uses are modelled; everything is converted into the domain
//! [`RouteResult`] before leaving the crate.

use domain::{LonLat, RouteFeature, RouteLeg, RouteResult, RouteStep, TravelMode};
use serde::Deserialize;

use crate::error::RoutingError;

#[derive(Debug, Deserialize)]
pub(crate) struct RawFeatureCollection {
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    properties: RawProperties,
    geometry: RawGeometry,
}

#[derive(Debug, Deserialize)]
struct RawProperties {
    mode: String,
    /// Metres
    distance: f64,
    /// Seconds
    time: f64,
    #[serde(default)]
    legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
struct RawLeg {
    distance: f64,
    time: f64,
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    distance: Option<f64>,
    time: Option<f64>,
    from_index: Option<usize>,
    to_index: Option<usize>,
    instruction: Option<RawInstruction>,
}

#[derive(Debug, Deserialize)]
struct RawInstruction {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
enum RawGeometry {
    LineString(Vec<LonLat>),
    MultiLineString(Vec<Vec<LonLat>>),
}

impl RawGeometry {
    /// Positions in order; multi-part lines are concatenated
    fn into_positions(self) -> Vec<LonLat> {
        match self {
            Self::LineString(points) => points,
            Self::MultiLineString(parts) => parts.into_iter().flatten().collect(),
        }
    }
}

/// Parse and validate a response body
pub(crate) fn parse_route_response(body: &str) -> Result<RouteResult, RoutingError> {
    let raw: RawFeatureCollection =
        serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;
    raw.into_route_result()
}

impl RawFeatureCollection {
    fn into_route_result(self) -> Result<RouteResult, RoutingError> {
        let features = self
            .features
            .into_iter()
            .map(RawFeature::into_feature)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RouteResult::new(features))
    }
}

impl RawFeature {
    fn into_feature(self) -> Result<RouteFeature, RoutingError> {
        let mode: TravelMode = self
            .properties
            .mode
            .parse()
            .map_err(|e: domain::DomainError| RoutingError::ParseError(e.to_string()))?;

        Ok(RouteFeature {
            mode,
            legs: self
                .properties
                .legs
                .into_iter()
                .map(RawLeg::into_leg)
                .collect(),
            total_distance_meters: self.properties.distance,
            total_duration_seconds: self.properties.time,
            geometry: self.geometry.into_positions(),
        })
    }
}

impl RawLeg {
    fn into_leg(self) -> RouteLeg {
        RouteLeg {
            distance_meters: self.distance,
            duration_seconds: self.time,
            steps: self
                .steps
                .into_iter()
                .map(|s| RouteStep {
                    distance_meters: s.distance,
                    duration_seconds: s.time,
                    instruction: s.instruction.and_then(|i| i.text),
                    from_index: s.from_index,
                    to_index: s.to_index,
                })
                .collect(),
        }
    }
}
