//! In-memory fleet store
//!
//! One `BTreeMap` per table with its own id counter, all behind a single
//! `RwLock`. Ids start at 1 and are never reused.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use application::error::ApplicationError;
use application::ports::FleetStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    Alert, AlertUpdate, AppUsage, CarbonMetric, CitizenReport, CitizenReportUpdate,
    CollectionRoute, CollectionRouteUpdate, LocationRecord, Vehicle, VehicleUpdate,
};
use parking_lot::RwLock;
use tracing::{debug, instrument};

use super::sample_data::{SampleFleet, sample_fleet};

/// Records that receive their id from the store
trait Record: Clone {
    fn set_id(&mut self, id: u32);
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(impl Record for $ty {
            fn set_id(&mut self, id: u32) {
                self.id = id;
            }
        })*
    };
}

impl_record!(
    Vehicle,
    CollectionRoute,
    LocationRecord,
    Alert,
    CitizenReport,
    CarbonMetric,
    AppUsage,
);

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<u32, T>,
    next_id: u32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> Table<T> {
    fn insert(&mut self, mut record: T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        record.set_id(id);
        self.rows.insert(id, record.clone());
        record
    }

    fn get(&self, id: u32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        self.rows.values().find(|r| predicate(r)).cloned()
    }

    fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|r| predicate(r)).cloned().collect()
    }

    fn modify(&mut self, id: u32, apply: impl FnOnce(&mut T)) -> Option<T> {
        self.rows.get_mut(&id).map(|record| {
            apply(record);
            record.clone()
        })
    }
}

/// Newest first, ties broken by the higher id
fn newest_first<T, K: Ord>(mut rows: Vec<T>, key: impl Fn(&T) -> (K, u32), limit: usize) -> Vec<T> {
    rows.sort_by_key(|row| Reverse(key(row)));
    rows.truncate(limit);
    rows
}

#[derive(Debug, Default)]
struct Tables {
    vehicles: Table<Vehicle>,
    routes: Table<CollectionRoute>,
    locations: Table<LocationRecord>,
    alerts: Table<Alert>,
    citizen_reports: Table<CitizenReport>,
    carbon_metrics: Table<CarbonMetric>,
    app_usage: Table<AppUsage>,
}

/// Fleet store keeping every table in process memory
#[derive(Debug, Default)]
pub struct InMemoryFleetStore {
    tables: RwLock<Tables>,
}

impl InMemoryFleetStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the demo fleet, timestamps relative to `now`
    pub fn with_sample_data(now: DateTime<Utc>) -> Self {
        let store = Self::new();
        store.seed(sample_fleet(now));
        store
    }

    /// Insert a batch of records in order
    pub fn seed(&self, fleet: SampleFleet) {
        let mut tables = self.tables.write();
        let counts = (
            fleet.vehicles.len(),
            fleet.routes.len(),
            fleet.alerts.len(),
        );
        for vehicle in fleet.vehicles {
            tables.vehicles.insert(vehicle);
        }
        for route in fleet.routes {
            tables.routes.insert(route);
        }
        for location in fleet.locations {
            tables.locations.insert(location);
        }
        for alert in fleet.alerts {
            tables.alerts.insert(alert);
        }
        for report in fleet.citizen_reports {
            tables.citizen_reports.insert(report);
        }
        for metric in fleet.carbon_metrics {
            tables.carbon_metrics.insert(metric);
        }
        for usage in fleet.app_usage {
            tables.app_usage.insert(usage);
        }
        debug!(
            vehicles = counts.0,
            routes = counts.1,
            alerts = counts.2,
            "Fleet store seeded"
        );
    }
}

#[async_trait]
impl FleetStore for InMemoryFleetStore {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApplicationError> {
        Ok(self.tables.read().vehicles.all())
    }

    async fn get_vehicle(&self, id: u32) -> Result<Option<Vehicle>, ApplicationError> {
        Ok(self.tables.read().vehicles.get(id))
    }

    async fn get_vehicle_by_code(
        &self,
        code: &str,
    ) -> Result<Option<Vehicle>, ApplicationError> {
        Ok(self.tables.read().vehicles.find(|v| v.vehicle_id == code))
    }

    #[instrument(skip(self, vehicle), fields(code = %vehicle.vehicle_id))]
    async fn create_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, ApplicationError> {
        Ok(self.tables.write().vehicles.insert(vehicle))
    }

    async fn update_vehicle(
        &self,
        id: u32,
        update: VehicleUpdate,
    ) -> Result<Option<Vehicle>, ApplicationError> {
        Ok(self
            .tables
            .write()
            .vehicles
            .modify(id, |vehicle| update.apply_to(vehicle)))
    }

    async fn list_routes(&self) -> Result<Vec<CollectionRoute>, ApplicationError> {
        Ok(self.tables.read().routes.all())
    }

    async fn get_route(&self, id: u32) -> Result<Option<CollectionRoute>, ApplicationError> {
        Ok(self.tables.read().routes.get(id))
    }

    async fn get_route_by_code(
        &self,
        code: &str,
    ) -> Result<Option<CollectionRoute>, ApplicationError> {
        Ok(self.tables.read().routes.find(|r| r.route_id == code))
    }

    async fn routes_for_vehicle(
        &self,
        vehicle_id: u32,
    ) -> Result<Vec<CollectionRoute>, ApplicationError> {
        Ok(self
            .tables
            .read()
            .routes
            .filter(|r| r.vehicle_id == Some(vehicle_id)))
    }

    #[instrument(skip(self, route), fields(code = %route.route_id))]
    async fn create_route(
        &self,
        route: CollectionRoute,
    ) -> Result<CollectionRoute, ApplicationError> {
        Ok(self.tables.write().routes.insert(route))
    }

    async fn update_route(
        &self,
        id: u32,
        update: CollectionRouteUpdate,
    ) -> Result<Option<CollectionRoute>, ApplicationError> {
        Ok(self
            .tables
            .write()
            .routes
            .modify(id, |route| update.apply_to(route)))
    }

    async fn locations_for_vehicle(
        &self,
        vehicle_id: u32,
        limit: usize,
    ) -> Result<Vec<LocationRecord>, ApplicationError> {
        let rows = self
            .tables
            .read()
            .locations
            .filter(|l| l.vehicle_id == vehicle_id);
        Ok(newest_first(rows, |l| (l.timestamp, l.id), limit))
    }

    async fn create_location(
        &self,
        record: LocationRecord,
    ) -> Result<LocationRecord, ApplicationError> {
        Ok(self.tables.write().locations.insert(record))
    }

    async fn list_alerts(&self, limit: usize) -> Result<Vec<Alert>, ApplicationError> {
        let rows = self.tables.read().alerts.all();
        Ok(newest_first(rows, |a| (a.timestamp, a.id), limit))
    }

    async fn get_alert(&self, id: u32) -> Result<Option<Alert>, ApplicationError> {
        Ok(self.tables.read().alerts.get(id))
    }

    #[instrument(skip(self, alert), fields(kind = %alert.kind))]
    async fn create_alert(&self, alert: Alert) -> Result<Alert, ApplicationError> {
        Ok(self.tables.write().alerts.insert(alert))
    }

    async fn update_alert(
        &self,
        id: u32,
        update: AlertUpdate,
    ) -> Result<Option<Alert>, ApplicationError> {
        Ok(self
            .tables
            .write()
            .alerts
            .modify(id, |alert| update.apply_to(alert)))
    }

    async fn list_citizen_reports(&self) -> Result<Vec<CitizenReport>, ApplicationError> {
        Ok(self.tables.read().citizen_reports.all())
    }

    async fn citizen_reports_by_type(
        &self,
        kind: &str,
    ) -> Result<Vec<CitizenReport>, ApplicationError> {
        Ok(self.tables.read().citizen_reports.filter(|r| r.kind == kind))
    }

    async fn create_citizen_report(
        &self,
        report: CitizenReport,
    ) -> Result<CitizenReport, ApplicationError> {
        Ok(self.tables.write().citizen_reports.insert(report))
    }

    async fn update_citizen_report(
        &self,
        id: u32,
        update: CitizenReportUpdate,
    ) -> Result<Option<CitizenReport>, ApplicationError> {
        Ok(self
            .tables
            .write()
            .citizen_reports
            .modify(id, |report| update.apply_to(report)))
    }

    async fn carbon_metrics(&self, days: usize) -> Result<Vec<CarbonMetric>, ApplicationError> {
        let rows = self.tables.read().carbon_metrics.all();
        Ok(newest_first(rows, |m| (m.date, m.id), days))
    }

    async fn create_carbon_metric(
        &self,
        metric: CarbonMetric,
    ) -> Result<CarbonMetric, ApplicationError> {
        Ok(self.tables.write().carbon_metrics.insert(metric))
    }

    async fn app_usage(&self, days: usize) -> Result<Vec<AppUsage>, ApplicationError> {
        let rows = self.tables.read().app_usage.all();
        Ok(newest_first(rows, |u| (u.date, u.id), days))
    }

    async fn create_app_usage(&self, usage: AppUsage) -> Result<AppUsage, ApplicationError> {
        Ok(self.tables.write().app_usage.insert(usage))
    }
}
