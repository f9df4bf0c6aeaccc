//! Demo fleet used when the server starts with sample data
//!
//! Timestamps are relative to the `now` passed in. Routes, locations and
//! alerts reference vehicles and routes by the ids an empty store assigns
//! (1, 2, 3 in insertion order).

use chrono::{DateTime, Duration, NaiveDate, Utc};
use domain::{
    Alert, AlertSeverity, AppUsage, CarbonMetric, CitizenReport, CollectionRoute,
    LocationRecord, MaintenanceStatus, ReportStatus, RouteStatus, Vehicle, VehicleStatus,
};

/// All demo records, in insertion order
#[derive(Debug, Clone)]
pub struct SampleFleet {
    pub vehicles: Vec<Vehicle>,
    pub routes: Vec<CollectionRoute>,
    pub locations: Vec<LocationRecord>,
    pub alerts: Vec<Alert>,
    pub citizen_reports: Vec<CitizenReport>,
    pub carbon_metrics: Vec<CarbonMetric>,
    pub app_usage: Vec<AppUsage>,
}

/// Build the demo fleet relative to `now`
pub fn sample_fleet(now: DateTime<Utc>) -> SampleFleet {
    SampleFleet {
        vehicles: vehicles(),
        routes: routes(now),
        locations: locations(now),
        alerts: alerts(now),
        citizen_reports: citizen_reports(now),
        carbon_metrics: carbon_metrics(now.date_naive()),
        app_usage: app_usage(now.date_naive()),
    }
}

fn at(now: DateTime<Utc>, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    now.date_naive()
        .and_hms_opt(hour, minute, 0)
        .map(|dt| dt.and_utc())
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    code: &str,
    name: &str,
    kind: &str,
    district: &str,
    driver: &str,
    status: VehicleStatus,
    fuel_level: u32,
    maintenance_status: MaintenanceStatus,
    current_mileage: f64,
    idle_time: u32,
    fuel_efficiency: f64,
    photo: &str,
) -> Vehicle {
    Vehicle {
        district: Some(district.to_string()),
        driver: Some(driver.to_string()),
        status,
        fuel_level,
        fuel_capacity: 100,
        maintenance_status,
        current_mileage,
        idle_time,
        fuel_efficiency: Some(fuel_efficiency),
        image: Some(format!(
            "https://images.unsplash.com/{photo}?auto=format&fit=crop&w=300&h=200"
        )),
        ..Vehicle::new(code, name, kind)
    }
}

fn vehicles() -> Vec<Vehicle> {
    vec![
        vehicle(
            "WM-T18",
            "Eco-Compactor",
            "Waste Collection",
            "Northeast",
            "Michael Chen",
            VehicleStatus::Active,
            68,
            MaintenanceStatus::Good,
            42.8,
            43,
            5.7,
            "photo-1532996122724-e3c354a0b15b",
        ),
        vehicle(
            "WM-T12",
            "Recycler Pro",
            "Recycling",
            "Downtown",
            "Sarah Johnson",
            VehicleStatus::Maintenance,
            45,
            MaintenanceStatus::NeedsService,
            31.2,
            22,
            4.9,
            "photo-1590847638075-83a135a9e712",
        ),
        vehicle(
            "WM-T24",
            "Green Hauler",
            "Waste Collection",
            "Southeast",
            "David Wilson",
            VehicleStatus::Active,
            82,
            MaintenanceStatus::Good,
            28.6,
            31,
            5.2,
            "photo-1591065550889-a42597daa498",
        ),
    ]
}

struct RouteSeed {
    code: &'static str,
    name: &'static str,
    kind: &'static str,
    district: &'static str,
    status: RouteStatus,
    start: (u32, u32),
    end: Option<(u32, u32)>,
    estimated_end: (u32, u32),
    total_stops: u32,
    completed_stops: u32,
    vehicle_id: u32,
}

const ROUTES: [RouteSeed; 5] = [
    RouteSeed {
        code: "WM-1043",
        name: "Northeast Residential Collection",
        kind: "residential",
        district: "Northeast",
        status: RouteStatus::InProgress,
        start: (8, 0),
        end: None,
        estimated_end: (15, 45),
        total_stops: 142,
        completed_stops: 78,
        vehicle_id: 1,
    },
    RouteSeed {
        code: "WM-1039",
        name: "Downtown Commercial",
        kind: "commercial",
        district: "Downtown",
        status: RouteStatus::Completed,
        start: (7, 0),
        end: Some((14, 30)),
        estimated_end: (15, 0),
        total_stops: 35,
        completed_stops: 35,
        vehicle_id: 1,
    },
    RouteSeed {
        code: "WM-1034",
        name: "Northeast Recycling",
        kind: "recycling",
        district: "Northeast",
        status: RouteStatus::Completed,
        start: (6, 0),
        end: Some((11, 45)),
        estimated_end: (12, 0),
        total_stops: 92,
        completed_stops: 92,
        vehicle_id: 1,
    },
    RouteSeed {
        code: "WM-1084",
        name: "Southeast Commercial",
        kind: "commercial",
        district: "Southeast",
        status: RouteStatus::Delayed,
        start: (9, 0),
        end: None,
        estimated_end: (16, 30),
        total_stops: 48,
        completed_stops: 20,
        vehicle_id: 3,
    },
    RouteSeed {
        code: "WM-1076",
        name: "Downtown Office Buildings",
        kind: "commercial",
        district: "Downtown",
        status: RouteStatus::Completed,
        start: (6, 30),
        end: Some((11, 42)),
        estimated_end: (12, 0),
        total_stops: 38,
        completed_stops: 38,
        vehicle_id: 2,
    },
];

fn routes(now: DateTime<Utc>) -> Vec<CollectionRoute> {
    ROUTES
        .iter()
        .map(|seed| CollectionRoute {
            district: Some(seed.district.to_string()),
            status: seed.status,
            start_time: at(now, seed.start.0, seed.start.1),
            end_time: seed.end.and_then(|(h, m)| at(now, h, m)),
            estimated_end_time: at(now, seed.estimated_end.0, seed.estimated_end.1),
            total_stops: seed.total_stops,
            completed_stops: seed.completed_stops,
            vehicle_id: Some(seed.vehicle_id),
            path_data: Some(serde_json::json!({ "coordinates": [] })),
            ..CollectionRoute::new(seed.code, seed.name, seed.kind)
        })
        .collect()
}

fn location(
    vehicle_id: u32,
    now: DateTime<Utc>,
    lat: f64,
    lon: f64,
    speed: f64,
    heading: f64,
    status: &str,
) -> LocationRecord {
    LocationRecord {
        speed: Some(speed),
        heading: Some(heading),
        status: Some(status.to_string()),
        ..LocationRecord::new(vehicle_id, now, lat, lon)
    }
}

fn locations(now: DateTime<Utc>) -> Vec<LocationRecord> {
    vec![
        location(1, now, 40.7128, -74.0060, 15.2, 90.0, "moving"),
        location(2, now, 40.7138, -74.0070, 0.0, 0.0, "stopped"),
        location(3, now, 40.7118, -74.0050, 12.8, 180.0, "moving"),
    ]
}

fn alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert {
            severity: AlertSeverity::Warning,
            route_id: Some(4),
            vehicle_id: Some(3),
            ..Alert::new(
                "traffic_delay",
                "Traffic Delay Alert",
                "Route #WM-1084 experiencing heavy traffic on Main St. Expected delay of 15-20 minutes.",
                now - Duration::minutes(14),
            )
        },
        Alert {
            severity: AlertSeverity::Error,
            vehicle_id: Some(2),
            ..Alert::new(
                "maintenance",
                "Vehicle Maintenance Required",
                "Vehicle WM-T12 reporting engine temperature above threshold. Maintenance check required.",
                now - Duration::minutes(47),
            )
        },
        Alert {
            severity: AlertSeverity::Success,
            route_id: Some(5),
            vehicle_id: Some(2),
            ..Alert::new(
                "route_completion",
                "Route #WM-1076 Completed",
                "Commercial route completed 18 minutes ahead of schedule. All 38 stops serviced.",
                now - Duration::hours(1),
            )
        },
        Alert {
            severity: AlertSeverity::Info,
            ..Alert::new(
                "citizen_report",
                "Citizen Report: Missed Pickup",
                "Resident at 1342 Oak Street reports missed recycling pickup from yesterday's route.",
                now - Duration::minutes(82),
            )
        },
        Alert {
            severity: AlertSeverity::Success,
            ..Alert::new(
                "carbon_milestone",
                "Reduced Carbon Milestone",
                "Weekly carbon reduction goal achieved! 5.2 metric tons of CO₂ saved through optimized routing.",
                now - Duration::minutes(130),
            )
        },
    ]
}

fn report(
    kind: &str,
    description: &str,
    status: ReportStatus,
    address: &str,
    (lat, lon): (f64, f64),
    timestamp: DateTime<Utc>,
) -> CitizenReport {
    CitizenReport {
        status,
        latitude: Some(lat),
        longitude: Some(lon),
        ..CitizenReport::new(kind, description, address, timestamp)
    }
}

fn citizen_reports(now: DateTime<Utc>) -> Vec<CitizenReport> {
    vec![
        report(
            "missed_pickup",
            "Recycling bin not emptied on scheduled day",
            ReportStatus::New,
            "1342 Oak Street",
            (40.7128, -74.0060),
            now - Duration::days(1),
        ),
        CitizenReport {
            assigned_vehicle_id: Some(3),
            ..report(
                "overflow",
                "Public trash bin overflowing at park entrance",
                ReportStatus::Assigned,
                "Central Park North Entrance",
                (40.7138, -74.0070),
                now - Duration::hours(3),
            )
        },
        report(
            "improper_disposal",
            "Construction materials in residential waste bin",
            ReportStatus::Resolved,
            "987 Maple Avenue",
            (40.7118, -74.0050),
            now - Duration::days(2),
        ),
        report(
            "damaged_bin",
            "Recycling bin has broken lid",
            ReportStatus::New,
            "456 Elm Street",
            (40.7108, -74.0040),
            now - Duration::hours(5),
        ),
    ]
}

/// (total, saved, routes optimized, fuel saved) for today, yesterday, ...
const CARBON_DAYS: [(f64, f64, u32, f64); 7] = [
    (3.2, 0.7, 18, 42.5),
    (3.5, 0.6, 16, 38.2),
    (3.8, 0.5, 15, 32.7),
    (3.4, 0.8, 17, 45.3),
    (3.7, 0.4, 14, 28.9),
    (3.3, 0.7, 16, 41.2),
    (3.9, 0.3, 13, 24.5),
];

const CARBON_TARGET: f64 = 2.8;

fn carbon_metrics(today: NaiveDate) -> Vec<CarbonMetric> {
    (0_i64..)
        .zip(CARBON_DAYS)
        .map(|(days_ago, (total, saved, routes_optimized, fuel_saved))| CarbonMetric {
            saved_emissions: saved,
            target_emissions: Some(CARBON_TARGET),
            routes_optimized,
            fuel_saved,
            ..CarbonMetric::new(today - Duration::days(days_ago), total)
        })
        .collect()
}

fn app_usage(today: NaiveDate) -> Vec<AppUsage> {
    vec![
        AppUsage {
            reports_filed: 164,
            satisfaction: Some(86.0),
            ..AppUsage::new(today, 8632)
        },
        AppUsage {
            reports_filed: 152,
            satisfaction: Some(83.0),
            ..AppUsage::new(today - Duration::days(30), 7710)
        },
    ]
}
