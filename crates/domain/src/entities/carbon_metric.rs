//! Carbon metric - daily emission totals for the fleet

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Emission figures for one day, in tonnes of CO2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonMetric {
    pub id: u32,
    pub date: NaiveDate,
    pub total_emissions: f64,
    pub saved_emissions: f64,
    pub target_emissions: Option<f64>,
    pub routes_optimized: u32,
    /// Fuel saved in litres
    pub fuel_saved: f64,
}

impl CarbonMetric {
    pub const fn new(date: NaiveDate, total_emissions: f64) -> Self {
        Self {
            id: 0,
            date,
            total_emissions,
            saved_emissions: 0.0,
            target_emissions: None,
            routes_optimized: 0,
            fuel_saved: 0.0,
        }
    }

    /// Whether the day stayed at or below its target (true when no target is set)
    #[must_use]
    pub fn within_target(&self) -> bool {
        self.target_emissions
            .is_none_or(|target| self.total_emissions <= target)
    }
}
