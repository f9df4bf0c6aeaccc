//! Collection route entity - a planned or running pickup round

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a collection route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Delayed,
    Cancelled,
}

impl RouteStatus {
    /// Planned or currently being driven
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Planned | Self::InProgress)
    }
}

/// A collection route assigned to a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRoute {
    pub id: u32,
    /// Dispatch code (e.g. "WM-1043"), unique
    pub route_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub district: Option<String>,
    pub status: RouteStatus,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub estimated_end_time: Option<DateTime<Utc>>,
    pub total_stops: u32,
    pub completed_stops: u32,
    /// Store id of the assigned vehicle
    pub vehicle_id: Option<u32>,
    /// Opaque path payload kept for the map widgets
    pub path_data: Option<serde_json::Value>,
}

impl CollectionRoute {
    pub fn new(
        route_id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            route_id: route_id.into(),
            name: name.into(),
            kind: kind.into(),
            district: None,
            status: RouteStatus::default(),
            start_time: None,
            end_time: None,
            estimated_end_time: None,
            total_stops: 0,
            completed_stops: 0,
            vehicle_id: None,
            path_data: None,
        }
    }

    /// Completed share of stops in percent (0 for a route without stops)
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.total_stops == 0 {
            return 0.0;
        }
        f64::from(self.completed_stops) * 100.0 / f64::from(self.total_stops)
    }
}

/// Partial update merged into a stored route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionRouteUpdate {
    pub status: Option<RouteStatus>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub estimated_end_time: Option<DateTime<Utc>>,
    pub completed_stops: Option<u32>,
    pub vehicle_id: Option<u32>,
    pub path_data: Option<serde_json::Value>,
}

impl CollectionRouteUpdate {
    pub fn apply_to(self, route: &mut CollectionRoute) {
        if let Some(status) = self.status {
            route.status = status;
        }
        if self.start_time.is_some() {
            route.start_time = self.start_time;
        }
        if self.end_time.is_some() {
            route.end_time = self.end_time;
        }
        if self.estimated_end_time.is_some() {
            route.estimated_end_time = self.estimated_end_time;
        }
        if let Some(done) = self.completed_stops {
            route.completed_stops = done;
        }
        if self.vehicle_id.is_some() {
            route.vehicle_id = self.vehicle_id;
        }
        if self.path_data.is_some() {
            route.path_data = self.path_data;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_statuses() {
        assert!(RouteStatus::Planned.is_active());
        assert!(RouteStatus::InProgress.is_active());
        assert!(!RouteStatus::Delayed.is_active());
        assert!(!RouteStatus::Completed.is_active());
    }

    #[test]
    fn progress_percent() {
        let mut route = CollectionRoute::new("WM-1", "Test", "residential");
        assert!(route.progress_percent().abs() < f64::EPSILON);

        route.total_stops = 142;
        route.completed_stops = 71;
        assert!((route.progress_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn status_serializes_snake_case() {
        let mut route = CollectionRoute::new("WM-1", "Test", "residential");
        route.status = RouteStatus::InProgress;
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["status"], "in_progress");
        assert_eq!(json["routeId"], "WM-1");
    }

    #[test]
    fn update_completes_route() {
        let mut route = CollectionRoute::new("WM-1", "Test", "residential");
        route.total_stops = 10;
        CollectionRouteUpdate {
            status: Some(RouteStatus::Completed),
            completed_stops: Some(10),
            ..CollectionRouteUpdate::default()
        }
        .apply_to(&mut route);
        assert_eq!(route.status, RouteStatus::Completed);
        assert_eq!(route.completed_stops, 10);
    }
}
