//! Fleet queries and the dashboard summary
//!
//! Thin layer over a [`FleetStore`] that applies the dashboard's default
//! windows and turns missing records into [`ApplicationError::NotFound`].

use std::sync::Arc;

use domain::{
    Alert, AlertUpdate, AppUsage, CarbonMetric, CitizenReport, CollectionRoute, LocationRecord,
    RouteStatus, Vehicle, VehicleStatus,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::FleetStore;

/// Locations returned when no limit is given
pub const DEFAULT_LOCATION_LIMIT: usize = 10;
/// Alerts returned when no limit is given
pub const DEFAULT_ALERT_LIMIT: usize = 10;
/// Carbon metric days returned when none are given
pub const DEFAULT_CARBON_DAYS: usize = 7;
/// App usage days returned when none are given
pub const DEFAULT_APP_USAGE_DAYS: usize = 30;
/// Newest alerts considered for the unread count
pub const SUMMARY_ALERT_WINDOW: usize = 100;

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Routes planned or in progress
    pub active_routes: usize,
    /// Vehicles with status active
    pub active_vehicles: usize,
    /// Routes currently delayed
    pub delayed_vehicles: usize,
    /// Estimated fuel used, Σ (capacity - level) × 0.1
    pub fuel_consumption: f64,
    /// Emissions of the newest carbon metric
    pub carbon_emissions: f64,
    pub carbon_saved: f64,
    /// Unread alerts among the newest hundred
    pub alert_count: usize,
}

/// Fleet use cases backing the dashboard API
#[derive(Clone)]
pub struct FleetService {
    store: Arc<dyn FleetStore>,
}

impl std::fmt::Debug for FleetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FleetService").finish_non_exhaustive()
    }
}

impl FleetService {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn vehicles(&self) -> Result<Vec<Vehicle>, ApplicationError> {
        self.store.list_vehicles().await
    }

    pub async fn vehicle(&self, id: u32) -> Result<Vehicle, ApplicationError> {
        self.store
            .get_vehicle(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("Vehicle {id}")))
    }

    pub async fn routes(&self) -> Result<Vec<CollectionRoute>, ApplicationError> {
        self.store.list_routes().await
    }

    pub async fn route(&self, id: u32) -> Result<CollectionRoute, ApplicationError> {
        self.store
            .get_route(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("Route {id}")))
    }

    pub async fn routes_for_vehicle(
        &self,
        vehicle_id: u32,
    ) -> Result<Vec<CollectionRoute>, ApplicationError> {
        self.store.routes_for_vehicle(vehicle_id).await
    }

    pub async fn vehicle_locations(
        &self,
        vehicle_id: u32,
        limit: Option<usize>,
    ) -> Result<Vec<LocationRecord>, ApplicationError> {
        self.store
            .locations_for_vehicle(vehicle_id, limit.unwrap_or(DEFAULT_LOCATION_LIMIT))
            .await
    }

    pub async fn alerts(&self, limit: Option<usize>) -> Result<Vec<Alert>, ApplicationError> {
        self.store
            .list_alerts(limit.unwrap_or(DEFAULT_ALERT_LIMIT))
            .await
    }

    pub async fn alert(&self, id: u32) -> Result<Alert, ApplicationError> {
        self.store
            .get_alert(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("Alert {id}")))
    }

    /// Merge a partial update into an alert
    #[instrument(skip(self, update))]
    pub async fn update_alert(
        &self,
        id: u32,
        update: AlertUpdate,
    ) -> Result<Alert, ApplicationError> {
        self.store
            .update_alert(id, update)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("Alert {id}")))
    }

    /// All reports, or only those of `kind`
    pub async fn citizen_reports(
        &self,
        kind: Option<&str>,
    ) -> Result<Vec<CitizenReport>, ApplicationError> {
        match kind {
            Some(kind) => self.store.citizen_reports_by_type(kind).await,
            None => self.store.list_citizen_reports().await,
        }
    }

    pub async fn carbon_metrics(
        &self,
        days: Option<usize>,
    ) -> Result<Vec<CarbonMetric>, ApplicationError> {
        self.store
            .carbon_metrics(days.unwrap_or(DEFAULT_CARBON_DAYS))
            .await
    }

    pub async fn app_usage(&self, days: Option<usize>) -> Result<Vec<AppUsage>, ApplicationError> {
        self.store
            .app_usage(days.unwrap_or(DEFAULT_APP_USAGE_DAYS))
            .await
    }

    /// Aggregate the dashboard headline numbers
    #[instrument(skip(self))]
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApplicationError> {
        let vehicles = self.store.list_vehicles().await?;
        let routes = self.store.list_routes().await?;
        let alerts = self.store.list_alerts(SUMMARY_ALERT_WINDOW).await?;
        let latest_metric = self.store.carbon_metrics(1).await?.into_iter().next();

        let summary = DashboardSummary {
            active_routes: routes.iter().filter(|r| r.status.is_active()).count(),
            active_vehicles: vehicles
                .iter()
                .filter(|v| v.status == VehicleStatus::Active)
                .count(),
            delayed_vehicles: routes
                .iter()
                .filter(|r| r.status == RouteStatus::Delayed)
                .count(),
            fuel_consumption: vehicles.iter().map(Vehicle::fuel_consumed).sum(),
            carbon_emissions: latest_metric.as_ref().map_or(0.0, |m| m.total_emissions),
            carbon_saved: latest_metric.as_ref().map_or(0.0, |m| m.saved_emissions),
            alert_count: alerts.iter().filter(|a| !a.is_read).count(),
        };

        debug!(?summary, "Dashboard summary computed");
        Ok(summary)
    }
}
