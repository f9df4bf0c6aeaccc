//! Daily citizen app usage statistics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUsage {
    pub id: u32,
    pub date: NaiveDate,
    pub total_users: u32,
    pub reports_filed: u32,
    /// Satisfaction rating in percent
    pub satisfaction: Option<f64>,
}

impl AppUsage {
    pub const fn new(date: NaiveDate, total_users: u32) -> Self {
        Self {
            id: 0,
            date,
            total_users,
            reports_filed: 0,
            satisfaction: None,
        }
    }
}
