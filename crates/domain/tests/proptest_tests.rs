//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{
    GeoLocation, LatLng, LatLngBounds, LonLat, RouteOptions, TravelMode, Waypoint,
    ensure_routable,
};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// Coordinate Order Property Tests
// ============================================================================

mod coordinate_order_tests {
    use super::*;

    proptest! {
        #[test]
        fn swap_moves_latitude_first(
            lon in -180.0f64..=180.0f64,
            lat in -90.0f64..=90.0f64
        ) {
            let drawn = LonLat::new(lon, lat).to_lat_lng();
            prop_assert_eq!(drawn, LatLng::new(lat, lon));
        }

        #[test]
        fn lon_lat_wire_order_is_preserved(
            lon in -180.0f64..=180.0f64,
            lat in -90.0f64..=90.0f64
        ) {
            let json = serde_json::to_string(&LonLat::new(lon, lat)).unwrap();
            let pair: [f64; 2] = serde_json::from_str(&json).unwrap();
            prop_assert!((pair[0] - lon).abs() < f64::EPSILON);
            prop_assert!((pair[1] - lat).abs() < f64::EPSILON);
        }

        #[test]
        fn bounds_contain_every_point(
            points in prop::collection::vec(
                (-90.0f64..=90.0f64, -180.0f64..=180.0f64),
                1..20
            )
        ) {
            let points: Vec<LatLng> = points
                .into_iter()
                .map(|(lat, lng)| LatLng::new(lat, lng))
                .collect();
            let bounds = LatLngBounds::from_points(&points).unwrap();
            for p in points {
                prop_assert!(bounds.contains(p));
            }
        }
    }
}

// ============================================================================
// Waypoint Property Tests
// ============================================================================

mod waypoint_tests {
    use super::*;

    fn waypoints(count: usize) -> Vec<Waypoint> {
        (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let offset = i as f64 * 0.01;
                Waypoint::new(40.0 + offset, -74.0 - offset).unwrap()
            })
            .collect()
    }

    proptest! {
        #[test]
        fn routable_iff_at_least_two(count in 0usize..10) {
            let list = waypoints(count);
            prop_assert_eq!(ensure_routable(&list).is_ok(), count >= 2);
        }

        #[test]
        fn waypoint_json_keeps_coordinates(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64,
            name in proptest::option::of("[A-Za-z ]{1,12}")
        ) {
            let mut wp = Waypoint::new(lat, lon).unwrap();
            if let Some(n) = &name {
                wp = wp.with_name(n.clone());
            }
            let json = serde_json::to_value(&wp).unwrap();
            prop_assert_eq!(json["latitude"].as_f64(), Some(lat));
            prop_assert_eq!(json["longitude"].as_f64(), Some(lon));
            prop_assert_eq!(json["name"].as_str(), name.as_deref());
        }
    }
}

// ============================================================================
// Route Options Property Tests
// ============================================================================

mod route_options_tests {
    use super::*;

    fn any_mode() -> impl Strategy<Value = TravelMode> {
        prop_oneof![
            Just(TravelMode::Drive),
            Just(TravelMode::Truck),
            Just(TravelMode::Bicycle),
            Just(TravelMode::Walk),
        ]
    }

    proptest! {
        #[test]
        fn mode_parses_from_its_name(mode in any_mode()) {
            let parsed: TravelMode = mode.as_str().parse().unwrap();
            prop_assert_eq!(parsed, mode);
        }

        #[test]
        fn avoid_entries_match_flags(tolls: bool, highways: bool) {
            let options = RouteOptions {
                avoid_tolls: tolls,
                avoid_highways: highways,
                ..RouteOptions::default()
            };
            let entries = options.avoid_entries();
            prop_assert_eq!(entries.len(), usize::from(tolls) + usize::from(highways));
            prop_assert_eq!(entries.contains(&"tolls"), tolls);
            prop_assert_eq!(entries.contains(&"highways"), highways);
        }
    }
}
