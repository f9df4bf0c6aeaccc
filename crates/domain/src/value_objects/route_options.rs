//! Route calculation options

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Travel mode requested from (and reported by) the routing provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Drive,
    Truck,
    Bicycle,
    Walk,
}

impl TravelMode {
    /// Provider vocabulary for this mode
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Drive => "drive",
            Self::Truck => "truck",
            Self::Bicycle => "bicycle",
            Self::Walk => "walk",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drive" => Ok(Self::Drive),
            "truck" => Ok(Self::Truck),
            "bicycle" => Ok(Self::Bicycle),
            "walk" => Ok(Self::Walk),
            other => Err(DomainError::unknown_variant("travel mode", other)),
        }
    }
}

/// Traffic prediction model for time-dependent routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficModel {
    BestGuess,
    Pessimistic,
    Optimistic,
}

impl TrafficModel {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BestGuess => "best_guess",
            Self::Pessimistic => "pessimistic",
            Self::Optimistic => "optimistic",
        }
    }
}

impl fmt::Display for TrafficModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrafficModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "best_guess" => Ok(Self::BestGuess),
            "pessimistic" => Ok(Self::Pessimistic),
            "optimistic" => Ok(Self::Optimistic),
            other => Err(DomainError::unknown_variant("traffic model", other)),
        }
    }
}

/// Per-request routing constraints
///
/// Every field has a default so a partial JSON object is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteOptions {
    pub mode: TravelMode,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_model: Option<TrafficModel>,
}

impl RouteOptions {
    /// Options for a given mode with no constraints
    #[must_use]
    pub fn for_mode(mode: TravelMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Provider avoid-entries, one per enabled flag
    #[must_use]
    pub fn avoid_entries(&self) -> Vec<&'static str> {
        let mut entries = Vec::with_capacity(2);
        if self.avoid_tolls {
            entries.push("tolls");
        }
        if self.avoid_highways {
            entries.push("highways");
        }
        entries
    }
}
