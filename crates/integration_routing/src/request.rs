//! Query parameter construction for routing requests

use chrono::SecondsFormat;
use domain::{RouteOptions, Waypoint};

/// Format waypoints as `lat,lon` pairs joined by `|`, in input order
#[must_use]
pub fn format_waypoints(waypoints: &[Waypoint]) -> String {
    waypoints
        .iter()
        .map(|wp| format!("{},{}", wp.latitude(), wp.longitude()))
        .collect::<Vec<_>>()
        .join("|")
}

/// Build the ordered query pairs for a routing request
///
/// `avoid` is repeated once per enabled restriction; `departure_time` and
/// `traffic_model` are only present when set.
#[must_use]
pub fn query_params(
    waypoints: &[Waypoint],
    options: &RouteOptions,
    api_key: &str,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("waypoints", format_waypoints(waypoints)),
        ("mode", options.mode.as_str().to_string()),
        ("apiKey", api_key.to_string()),
    ];

    for entry in options.avoid_entries() {
        params.push(("avoid", entry.to_string()));
    }

    if let Some(departure) = options.departure_time {
        params.push((
            "departure_time",
            departure.to_rfc3339_opts(SecondsFormat::Secs, true),
        ));
    }

    if let Some(model) = options.traffic_model {
        params.push(("traffic_model", model.as_str().to_string()));
    }

    params
}
