//! Citizen report - an issue filed by a resident (missed pickup, overflow, ...)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Handling status of a citizen report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    New,
    Assigned,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenReport {
    pub id: u32,
    /// Report category ("missed_pickup", "overflow", "illegal_dumping", ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub status: ReportStatus,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub reporter_id: Option<u32>,
    pub assigned_vehicle_id: Option<u32>,
}

impl CitizenReport {
    pub fn new(
        kind: impl Into<String>,
        description: impl Into<String>,
        address: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            kind: kind.into(),
            description: description.into(),
            status: ReportStatus::default(),
            address: address.into(),
            latitude: None,
            longitude: None,
            timestamp,
            reporter_id: None,
            assigned_vehicle_id: None,
        }
    }
}

/// Partial update merged into a stored report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CitizenReportUpdate {
    pub status: Option<ReportStatus>,
    pub description: Option<String>,
    pub assigned_vehicle_id: Option<u32>,
}

impl CitizenReportUpdate {
    pub fn apply_to(self, report: &mut CitizenReport) {
        if let Some(status) = self.status {
            report.status = status;
        }
        if let Some(description) = self.description {
            report.description = description;
        }
        if self.assigned_vehicle_id.is_some() {
            report.assigned_vehicle_id = self.assigned_vehicle_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigning_a_vehicle() {
        let mut report = CitizenReport::new("missed_pickup", "Bin not emptied", "12 Elm St", Utc::now());
        CitizenReportUpdate {
            status: Some(ReportStatus::Assigned),
            assigned_vehicle_id: Some(2),
            ..CitizenReportUpdate::default()
        }
        .apply_to(&mut report);
        assert_eq!(report.status, ReportStatus::Assigned);
        assert_eq!(report.assigned_vehicle_id, Some(2));
        assert_eq!(report.description, "Bin not emptied");
    }

    #[test]
    fn serializes_type_field() {
        let report = CitizenReport::new("overflow", "Full", "1 Main St", Utc::now());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "overflow");
        assert_eq!(json["status"], "new");
        assert!(json["assignedVehicleId"].is_null());
    }
}
