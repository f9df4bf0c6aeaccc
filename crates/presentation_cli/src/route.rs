//! Route calculation from the command line

use application::RoutingPort;
use chrono::{DateTime, Utc};
use domain::{RouteOptions, RouteResult, TrafficModel, TravelMode, Waypoint};
use infrastructure::{AppConfig, RoutingAdapter};
use secrecy::SecretString;
use tracing::info;

/// Parse `"lat,lon"` into a waypoint
pub fn parse_waypoint(input: &str) -> Result<Waypoint, String> {
    let (lat, lon) = input
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON but got '{input}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{lat}'"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{lon}'"))?;
    Waypoint::new(lat, lon).map_err(|e| e.to_string())
}

pub fn parse_mode(input: &str) -> Result<TravelMode, String> {
    input.parse().map_err(|e: domain::DomainError| e.to_string())
}

pub fn parse_traffic_model(input: &str) -> Result<TrafficModel, String> {
    input.parse().map_err(|e: domain::DomainError| e.to_string())
}

pub fn parse_departure(input: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 time '{input}': {e}"))
}

/// Options assembled from the route subcommand flags
#[derive(Debug, Clone, Default)]
pub struct RouteArgs {
    pub waypoints: Vec<Waypoint>,
    pub mode: TravelMode,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    pub departure: Option<DateTime<Utc>>,
    pub traffic_model: Option<TrafficModel>,
    pub api_key: Option<String>,
}

impl RouteArgs {
    pub fn options(&self) -> RouteOptions {
        RouteOptions {
            mode: self.mode,
            avoid_tolls: self.avoid_tolls,
            avoid_highways: self.avoid_highways,
            departure_time: self.departure,
            traffic_model: self.traffic_model,
        }
    }
}

/// Calculate a route through the configured routing service
pub async fn calculate(mut config: AppConfig, args: &RouteArgs) -> anyhow::Result<RouteResult> {
    if let Some(key) = &args.api_key {
        config.routing.api_key = Some(SecretString::from(key.clone()));
    }
    if !config.routing.is_configured() {
        anyhow::bail!(
            "No routing API key. Pass --api-key, set GEOAPIFY_API_KEY or FLEETDASH__ROUTING__API_KEY"
        );
    }

    let adapter = RoutingAdapter::from_config(&config.routing)?;
    info!(waypoints = args.waypoints.len(), mode = %args.mode, "Calculating route");
    Ok(adapter
        .calculate_route(&args.waypoints, &args.options())
        .await?)
}

/// One-paragraph human summary of a route
pub fn summarize(result: &RouteResult) -> String {
    let Some(feature) = result.primary() else {
        return "No route found".to_string();
    };
    format!(
        "{} route: {:.1} km, {} min, {} legs, {} points",
        feature.mode,
        feature.distance_km(),
        feature.duration_minutes(),
        feature.legs.len(),
        feature.geometry.len()
    )
}

#[cfg(test)]
mod tests {
    use domain::{LonLat, RouteFeature, RouteLeg};

    use super::*;

    #[test]
    fn parses_waypoint() {
        let wp = parse_waypoint("40.7128, -74.0060").unwrap();
        assert!((wp.latitude() - 40.7128).abs() < f64::EPSILON);
        assert!((wp.longitude() + 74.006).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_malformed_waypoints() {
        assert!(parse_waypoint("40.7").is_err());
        assert!(parse_waypoint("north,-74").is_err());
        assert!(parse_waypoint("95.0,0.0").is_err());
    }

    #[test]
    fn parses_mode_and_traffic() {
        assert_eq!(parse_mode("truck").unwrap(), TravelMode::Truck);
        assert!(parse_mode("rocket").is_err());
        assert!(parse_traffic_model("pessimistic").is_ok());
    }

    #[test]
    fn parses_departure() {
        let dt = parse_departure("2024-05-14T08:30:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-14T06:30:00+00:00");
        assert!(parse_departure("tomorrow").is_err());
    }

    #[test]
    fn options_from_args() {
        let args = RouteArgs {
            mode: TravelMode::Truck,
            avoid_tolls: true,
            ..RouteArgs::default()
        };
        let options = args.options();
        assert_eq!(options.avoid_entries(), vec!["tolls"]);
        assert_eq!(options.mode, TravelMode::Truck);
    }

    #[test]
    fn summary_formats_primary_feature() {
        let result = RouteResult::new(vec![RouteFeature {
            mode: TravelMode::Drive,
            legs: vec![RouteLeg::default()],
            total_distance_meters: 12_345.0,
            total_duration_seconds: 1_260.0,
            geometry: vec![LonLat::new(-74.0, 40.7), LonLat::new(-74.01, 40.71)],
        }]);
        assert_eq!(
            summarize(&result),
            "drive route: 12.3 km, 21 min, 1 legs, 2 points"
        );
        assert_eq!(summarize(&RouteResult::new(Vec::new())), "No route found");
    }

    #[tokio::test]
    async fn calculate_without_key_fails_early() {
        let args = RouteArgs {
            waypoints: vec![parse_waypoint("40.7,-74.0").unwrap()],
            ..RouteArgs::default()
        };
        let err = calculate(AppConfig::default(), &args).await.unwrap_err();
        assert!(err.to_string().contains("No routing API key"));
    }
}
