//! Domain entities - Objects with identity and lifecycle
//!
//! Fleet records carry an integer `id` assigned by the store on insert;
//! constructors leave it at 0.

mod alert;
mod app_usage;
mod carbon_metric;
mod citizen_report;
mod collection_route;
mod location_record;
mod route_result;
mod vehicle;

pub use alert::{Alert, AlertSeverity, AlertUpdate};
pub use app_usage::AppUsage;
pub use carbon_metric::CarbonMetric;
pub use citizen_report::{CitizenReport, CitizenReportUpdate, ReportStatus};
pub use collection_route::{CollectionRoute, CollectionRouteUpdate, RouteStatus};
pub use location_record::LocationRecord;
pub use route_result::{RouteFeature, RouteLeg, RouteResult, RouteStep};
pub use vehicle::{MaintenanceStatus, Vehicle, VehicleStatus, VehicleUpdate};
