//! Fleet store port
//!
//! Tables of fleet records keyed by integer id. Ids are assigned by the store
//! on insert, starting at 1 per table. Listing methods that take a `limit`
//! or `days` return the newest records first.

use async_trait::async_trait;
use domain::{
    Alert, AlertUpdate, AppUsage, CarbonMetric, CitizenReport, CitizenReportUpdate,
    CollectionRoute, CollectionRouteUpdate, LocationRecord, Vehicle, VehicleUpdate,
};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fleet record storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FleetStore: Send + Sync {
    // Vehicles

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApplicationError>;

    async fn get_vehicle(&self, id: u32) -> Result<Option<Vehicle>, ApplicationError>;

    /// Look up by fleet code (e.g. "WM-T18")
    async fn get_vehicle_by_code(&self, code: &str)
    -> Result<Option<Vehicle>, ApplicationError>;

    async fn create_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, ApplicationError>;

    async fn update_vehicle(
        &self,
        id: u32,
        update: VehicleUpdate,
    ) -> Result<Option<Vehicle>, ApplicationError>;

    // Collection routes

    async fn list_routes(&self) -> Result<Vec<CollectionRoute>, ApplicationError>;

    async fn get_route(&self, id: u32) -> Result<Option<CollectionRoute>, ApplicationError>;

    /// Look up by dispatch code (e.g. "WM-1043")
    async fn get_route_by_code(
        &self,
        code: &str,
    ) -> Result<Option<CollectionRoute>, ApplicationError>;

    async fn routes_for_vehicle(
        &self,
        vehicle_id: u32,
    ) -> Result<Vec<CollectionRoute>, ApplicationError>;

    async fn create_route(
        &self,
        route: CollectionRoute,
    ) -> Result<CollectionRoute, ApplicationError>;

    async fn update_route(
        &self,
        id: u32,
        update: CollectionRouteUpdate,
    ) -> Result<Option<CollectionRoute>, ApplicationError>;

    // Location history

    /// Most recent positions of a vehicle, newest first
    async fn locations_for_vehicle(
        &self,
        vehicle_id: u32,
        limit: usize,
    ) -> Result<Vec<LocationRecord>, ApplicationError>;

    async fn create_location(
        &self,
        record: LocationRecord,
    ) -> Result<LocationRecord, ApplicationError>;

    // Alerts

    /// Newest alerts first
    async fn list_alerts(&self, limit: usize) -> Result<Vec<Alert>, ApplicationError>;

    async fn get_alert(&self, id: u32) -> Result<Option<Alert>, ApplicationError>;

    async fn create_alert(&self, alert: Alert) -> Result<Alert, ApplicationError>;

    async fn update_alert(
        &self,
        id: u32,
        update: AlertUpdate,
    ) -> Result<Option<Alert>, ApplicationError>;

    // Citizen reports

    async fn list_citizen_reports(&self) -> Result<Vec<CitizenReport>, ApplicationError>;

    async fn citizen_reports_by_type(
        &self,
        kind: &str,
    ) -> Result<Vec<CitizenReport>, ApplicationError>;

    async fn create_citizen_report(
        &self,
        report: CitizenReport,
    ) -> Result<CitizenReport, ApplicationError>;

    async fn update_citizen_report(
        &self,
        id: u32,
        update: CitizenReportUpdate,
    ) -> Result<Option<CitizenReport>, ApplicationError>;

    // Carbon metrics and app usage

    /// The latest `days` daily metrics, newest first
    async fn carbon_metrics(&self, days: usize) -> Result<Vec<CarbonMetric>, ApplicationError>;

    async fn create_carbon_metric(
        &self,
        metric: CarbonMetric,
    ) -> Result<CarbonMetric, ApplicationError>;

    /// The latest `days` usage records, newest first
    async fn app_usage(&self, days: usize) -> Result<Vec<AppUsage>, ApplicationError>;

    async fn create_app_usage(&self, usage: AppUsage) -> Result<AppUsage, ApplicationError>;
}
