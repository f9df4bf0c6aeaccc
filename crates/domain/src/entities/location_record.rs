//! Location record - one GPS fix reported by a vehicle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped vehicle position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: u32,
    pub vehicle_id: u32,
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    /// Speed in mph
    pub speed: Option<f64>,
    /// Heading in degrees clockwise from north
    pub heading: Option<f64>,
    /// Free-form movement state ("moving", "stopped", ...)
    pub status: Option<String>,
}

impl LocationRecord {
    pub const fn new(
        vehicle_id: u32,
        timestamp: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: 0,
            vehicle_id,
            timestamp,
            latitude,
            longitude,
            speed: None,
            heading: None,
            status: None,
        }
    }
}
