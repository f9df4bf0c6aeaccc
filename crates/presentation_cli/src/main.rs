//! Fleet dashboard CLI
//!
//! Command-line interface for route calculation, sample data and server checks.

#![allow(clippy::print_stdout)]

mod route;

use application::{
    DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_RADIUS, DistrictZone, generate_test_waypoints,
    zone_start_location,
};
use clap::{Parser, Subcommand};
use domain::{GeoLocation, TrafficModel, TravelMode, Waypoint};
use infrastructure::{AppConfig, LogFormat, LoggingConfig, init_logging};
use tracing::warn;

use crate::route::{
    RouteArgs, parse_departure, parse_mode, parse_traffic_model, parse_waypoint, summarize,
};

const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Fleet dashboard CLI
#[derive(Parser)]
#[command(name = "fleetdash-cli")]
#[command(author, version, about = "Fleet dashboard routing and admin CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a route through two or more waypoints
    ///
    /// Example: fleetdash-cli route -w 40.7128,-74.0060 -w 40.7306,-73.9352 --mode truck
    Route {
        /// Waypoint as LAT,LON (repeat; first is origin, last is destination)
        #[arg(
            short,
            long = "waypoint",
            value_parser = parse_waypoint,
            required = true,
            allow_hyphen_values = true
        )]
        waypoints: Vec<Waypoint>,

        /// Travel mode (drive, truck, bicycle, walk, ...)
        #[arg(short, long, value_parser = parse_mode, default_value = "drive")]
        mode: TravelMode,

        #[arg(long)]
        avoid_tolls: bool,

        #[arg(long)]
        avoid_highways: bool,

        /// Departure time (RFC 3339)
        #[arg(long, value_parser = parse_departure)]
        departure: Option<chrono::DateTime<chrono::Utc>>,

        /// Traffic model (best_guess, pessimistic, optimistic)
        #[arg(long, value_parser = parse_traffic_model)]
        traffic_model: Option<TrafficModel>,

        /// Geoapify API key (overrides configuration)
        #[arg(long, env = "GEOAPIFY_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Print the full route as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate random waypoints around a centre or district
    SampleWaypoints {
        /// Centre latitude
        #[arg(long, allow_hyphen_values = true, requires = "lon", conflicts_with = "zone")]
        lat: Option<f64>,

        /// Centre longitude
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// District whose start location is the centre
        #[arg(long)]
        zone: Option<String>,

        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,

        /// Maximum offset in degrees
        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_RADIUS)]
        radius: f64,
    },

    /// Show the start location of a district (unknown names fall back to North)
    Zone {
        /// District name; omit to list all
        name: Option<String>,
    },

    /// Show the dashboard summary of a running server
    Summary {
        /// Server URL
        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        url: String,
    },

    /// Check server health (used by container healthchecks)
    Health {
        /// Server URL
        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        url: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format endpoint URL
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn sample_center(
    lat: Option<f64>,
    lon: Option<f64>,
    zone: Option<&str>,
) -> anyhow::Result<GeoLocation> {
    match (lat, lon, zone) {
        (Some(lat), Some(lon), _) => GeoLocation::new(lat, lon)
            .map_err(|e| anyhow::anyhow!("Invalid centre {lat},{lon}: {e}")),
        (_, _, Some(zone)) => Ok(zone_start_location(zone).location()),
        _ => Ok(DistrictZone::default().start_location()),
    }
}

#[tokio::main]
#[allow(clippy::too_many_lines)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig {
        filter: log_filter_from_verbosity(cli.verbose).to_string(),
        format: LogFormat::Text,
    })?;

    let client = reqwest::Client::new();

    match cli.command {
        Commands::Route {
            waypoints,
            mode,
            avoid_tolls,
            avoid_highways,
            departure,
            traffic_model,
            api_key,
            json,
        } => {
            let config = AppConfig::load().unwrap_or_else(|e| {
                warn!("Failed to load config, using defaults: {}", e);
                AppConfig::default()
            });
            let args = RouteArgs {
                waypoints,
                mode,
                avoid_tolls,
                avoid_highways,
                departure,
                traffic_model,
                api_key,
            };

            let result = route::calculate(config, &args).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("🗺️  {}", summarize(&result));
            }
        },

        Commands::SampleWaypoints {
            lat,
            lon,
            zone,
            count,
            radius,
        } => {
            let center = sample_center(lat, lon, zone.as_deref())?;
            let waypoints = generate_test_waypoints(center, count, radius);
            println!("{}", serde_json::to_string_pretty(&waypoints)?);
        },

        Commands::Zone { name } => match name {
            Some(name) => {
                let zone = DistrictZone::from_name(&name);
                let location = zone.start_location();
                println!("📍 {zone}: {location}");
            },
            None => {
                for zone in DistrictZone::ALL {
                    println!("📍 {zone}: {}", zone.start_location());
                }
            },
        },

        Commands::Summary { url } => {
            let resp = client
                .get(endpoint_url(&url, "/api/dashboard/summary"))
                .send()
                .await?
                .error_for_status()?
                .json::<serde_json::Value>()
                .await?;

            println!("📊 Dashboard Summary:");
            println!("{}", serde_json::to_string_pretty(&resp)?);
        },

        Commands::Health { url } => {
            let resp = client.get(endpoint_url(&url, "/health")).send().await;

            match resp {
                Ok(r) if r.status().is_success() => {
                    println!("✅ Healthy");
                },
                Ok(r) => {
                    println!("❌ Unhealthy: HTTP {}", r.status());
                    std::process::exit(1);
                },
                Err(e) => {
                    println!("❌ Unreachable: {e}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_filter_verbosity() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        assert_eq!(
            endpoint_url("http://localhost:5000", "/health"),
            "http://localhost:5000/health"
        );
        assert_eq!(
            endpoint_url("http://example.com/", "/api/dashboard/summary"),
            "http://example.com/api/dashboard/summary"
        );
    }

    #[test]
    fn route_command_parses_waypoints() {
        let cli = Cli::try_parse_from([
            "fleetdash-cli",
            "route",
            "-w",
            "40.7,-74.0",
            "-w",
            "40.71,-74.01",
            "--mode",
            "truck",
            "--avoid-tolls",
        ])
        .unwrap();

        match cli.command {
            Commands::Route {
                waypoints,
                mode,
                avoid_tolls,
                avoid_highways,
                ..
            } => {
                assert_eq!(waypoints.len(), 2);
                assert_eq!(mode, TravelMode::Truck);
                assert!(avoid_tolls);
                assert!(!avoid_highways);
            },
            _ => panic!("expected route command"),
        }
    }

    #[test]
    fn route_command_accepts_southern_hemisphere_waypoints() {
        let cli = Cli::try_parse_from([
            "fleetdash-cli",
            "route",
            "-w",
            "-33.8688,151.2093",
            "-w",
            "-33.87,151.21",
        ])
        .unwrap();

        match cli.command {
            Commands::Route { waypoints, .. } => {
                assert_eq!(waypoints.len(), 2);
                assert!((waypoints[0].latitude() + 33.8688).abs() < 1e-9);
                assert!((waypoints[1].longitude() - 151.21).abs() < 1e-9);
            },
            _ => panic!("expected route command"),
        }
    }

    #[test]
    fn route_command_rejects_bad_waypoint() {
        assert!(Cli::try_parse_from(["fleetdash-cli", "route", "-w", "north"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["fleetdash-cli", "-vv", "zone"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn sample_center_from_coordinates_or_zone() {
        let center = sample_center(Some(40.7), Some(-74.0), None).unwrap();
        assert!((center.latitude() - 40.7).abs() < f64::EPSILON);

        let zone = sample_center(None, None, Some("West District")).unwrap();
        assert_eq!(zone, DistrictZone::West.start_location());

        let default = sample_center(None, None, None).unwrap();
        assert_eq!(default, DistrictZone::North.start_location());

        assert!(sample_center(Some(120.0), Some(0.0), None).is_err());
    }

    #[test]
    fn sample_waypoints_accepts_negative_longitude() {
        let cli = Cli::try_parse_from([
            "fleetdash-cli",
            "sample-waypoints",
            "--lat",
            "40.7",
            "--lon",
            "-74.0",
            "-c",
            "3",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::SampleWaypoints { count: 3, lon: Some(_), .. }
        ));
    }
}
