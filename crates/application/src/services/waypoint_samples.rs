//! Sample waypoints for demos and manual testing

use std::fmt;

use domain::{GeoLocation, Waypoint};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SAMPLE_COUNT: usize = 5;
/// Maximum offset from the centre, in degrees
pub const DEFAULT_SAMPLE_RADIUS: f64 = 0.05;

/// Random waypoints around `center` using the thread RNG
///
/// See [`generate_test_waypoints_with`].
pub fn generate_test_waypoints(
    center: GeoLocation,
    count: usize,
    radius_degrees: f64,
) -> Vec<Waypoint> {
    generate_test_waypoints_with(&mut rand::rng(), center, count, radius_degrees)
}

/// Random waypoints around `center`
///
/// The first waypoint is the centre itself, named "Start". The remaining
/// `count - 1` are offset by up to `radius_degrees` on each axis and named
/// "Stop 1", "Stop 2", ... Positions are clamped to valid coordinates.
pub fn generate_test_waypoints_with<R: Rng + ?Sized>(
    rng: &mut R,
    center: GeoLocation,
    count: usize,
    radius_degrees: f64,
) -> Vec<Waypoint> {
    let radius = radius_degrees.abs();
    let mut waypoints = Vec::with_capacity(count.max(1));
    waypoints.push(Waypoint::at(center).with_name("Start"));

    for i in 1..count {
        let lat_offset = rng.random_range(-1.0_f64..=1.0) * radius;
        let lon_offset = rng.random_range(-1.0_f64..=1.0) * radius;
        let location = GeoLocation::new_unchecked(
            (center.latitude() + lat_offset).clamp(-90.0, 90.0),
            (center.longitude() + lon_offset).clamp(-180.0, 180.0),
        );
        waypoints.push(Waypoint::at(location).with_name(format!("Stop {i}")));
    }

    waypoints
}

/// Collection districts with a fixed depot location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistrictZone {
    #[default]
    North,
    South,
    East,
    West,
    Central,
}

impl DistrictZone {
    pub const ALL: [Self; 5] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Central,
    ];

    /// Parse "North District", "north", ...; anything else is North
    pub fn from_name(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        let name = name.strip_suffix(" district").unwrap_or(&name);
        match name {
            "south" => Self::South,
            "east" => Self::East,
            "west" => Self::West,
            "central" => Self::Central,
            _ => Self::North,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::North => "North District",
            Self::South => "South District",
            Self::East => "East District",
            Self::West => "West District",
            Self::Central => "Central District",
        }
    }

    /// Depot location of the district
    pub const fn start_location(&self) -> GeoLocation {
        match self {
            Self::North => GeoLocation::new_unchecked(41.8781, -87.6298),
            Self::South => GeoLocation::new_unchecked(33.7490, -84.3880),
            Self::East => GeoLocation::new_unchecked(40.7128, -74.0060),
            Self::West => GeoLocation::new_unchecked(34.0522, -118.2437),
            Self::Central => GeoLocation::new_unchecked(39.9526, -75.1652),
        }
    }
}

impl fmt::Display for DistrictZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Start waypoint for a zone name; unknown zones fall back to North District
pub fn zone_start_location(zone: &str) -> Waypoint {
    Waypoint::at(DistrictZone::from_name(zone).start_location())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn nyc() -> GeoLocation {
        GeoLocation::new(40.7128, -74.006).unwrap()
    }

    #[test]
    fn first_waypoint_is_named_start_at_center() {
        let mut rng = StdRng::seed_from_u64(7);
        let waypoints = generate_test_waypoints_with(&mut rng, nyc(), 5, 0.05);

        assert_eq!(waypoints.len(), 5);
        assert_eq!(waypoints[0].name(), Some("Start"));
        assert_eq!(waypoints[0].location(), nyc());
        assert_eq!(waypoints[4].name(), Some("Stop 4"));
    }

    #[test]
    fn stops_stay_within_radius() {
        let mut rng = StdRng::seed_from_u64(42);
        let waypoints = generate_test_waypoints_with(&mut rng, nyc(), 50, 0.05);

        for wp in &waypoints[1..] {
            assert!((wp.latitude() - 40.7128).abs() <= 0.05 + 1e-12);
            assert!((wp.longitude() - -74.006).abs() <= 0.05 + 1e-12);
        }
    }

    #[test]
    fn same_seed_same_waypoints() {
        let a = generate_test_waypoints_with(&mut StdRng::seed_from_u64(1), nyc(), 4, 0.1);
        let b = generate_test_waypoints_with(&mut StdRng::seed_from_u64(1), nyc(), 4, 0.1);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_count_still_has_start() {
        let waypoints = generate_test_waypoints(nyc(), 0, 0.05);
        assert_eq!(waypoints.len(), 1);
    }

    #[test]
    fn offsets_near_pole_are_clamped() {
        let pole = GeoLocation::new(89.99, 179.99).unwrap();
        let waypoints = generate_test_waypoints(pole, 20, 1.0);
        assert!(waypoints.iter().all(|wp| wp.latitude() <= 90.0));
        assert!(waypoints.iter().all(|wp| wp.longitude() <= 180.0));
    }

    #[test]
    fn zone_lookup() {
        let chicago = zone_start_location("North District");
        assert!((chicago.latitude() - 41.8781).abs() < f64::EPSILON);

        let la = zone_start_location("West District");
        assert!((la.longitude() - -118.2437).abs() < f64::EPSILON);

        assert_eq!(DistrictZone::from_name("central"), DistrictZone::Central);
        assert_eq!(DistrictZone::from_name("  East District "), DistrictZone::East);
    }

    #[test]
    fn unknown_zone_falls_back_to_north() {
        let fallback = zone_start_location("Harbour District");
        assert_eq!(fallback.location(), DistrictZone::North.start_location());
    }
}
