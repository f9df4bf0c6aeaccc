//! Waypoint value object

use serde::{Deserialize, Serialize};

use super::{GeoLocation, LatLng};
use crate::errors::DomainError;

/// Minimum number of waypoints a route can be calculated for
pub const MIN_ROUTE_WAYPOINTS: usize = 2;

/// A point a route must pass through, with an optional label
///
/// Order matters in a waypoint list: the first entry is the origin, the last
/// is the destination, anything in between is a via-point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WaypointRecord", into = "WaypointRecord")]
pub struct Waypoint {
    location: GeoLocation,
    name: Option<String>,
    address: Option<String>,
}

impl Waypoint {
    /// Create a waypoint at validated coordinates
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` when the latitude or
    /// longitude is out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let location = GeoLocation::new(latitude, longitude)
            .map_err(|e| DomainError::InvalidCoordinates(e.to_string()))?;
        Ok(Self::at(location))
    }

    /// Create a waypoint at an already validated location
    #[must_use]
    pub const fn at(location: GeoLocation) -> Self {
        Self {
            location,
            name: None,
            address: None,
        }
    }

    /// Attach a display name (shown as the marker popup)
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a street address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.longitude()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    #[must_use]
    pub const fn to_lat_lng(&self) -> LatLng {
        self.location.to_lat_lng()
    }
}

/// Check that a waypoint list is long enough to route
///
/// # Errors
///
/// Returns `DomainError::ValidationError` for fewer than two waypoints.
pub fn ensure_routable(waypoints: &[Waypoint]) -> Result<(), DomainError> {
    if waypoints.len() < MIN_ROUTE_WAYPOINTS {
        return Err(DomainError::ValidationError(
            "at least 2 waypoints required".to_string(),
        ));
    }
    Ok(())
}

/// Wire form of a waypoint; validated on the way in
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WaypointRecord {
    latitude: f64,
    longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl TryFrom<WaypointRecord> for Waypoint {
    type Error = DomainError;

    fn try_from(record: WaypointRecord) -> Result<Self, Self::Error> {
        let mut waypoint = Self::new(record.latitude, record.longitude)?;
        waypoint.name = record.name;
        waypoint.address = record.address;
        Ok(waypoint)
    }
}

impl From<Waypoint> for WaypointRecord {
    fn from(waypoint: Waypoint) -> Self {
        Self {
            latitude: waypoint.latitude(),
            longitude: waypoint.longitude(),
            name: waypoint.name,
            address: waypoint.address,
        }
    }
}
