//! Alert entity - operational notifications shown on the dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert severity, drives the badge colour in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

/// A dashboard alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: u32,
    /// Alert category ("traffic_delay", "maintenance", ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub timestamp: DateTime<Utc>,
    pub vehicle_id: Option<u32>,
    pub route_id: Option<u32>,
    pub is_read: bool,
    pub action_taken: Option<String>,
}

impl Alert {
    pub fn new(
        kind: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            kind: kind.into(),
            title: title.into(),
            message: message.into(),
            severity: AlertSeverity::default(),
            timestamp,
            vehicle_id: None,
            route_id: None,
            is_read: false,
            action_taken: None,
        }
    }
}

/// Partial update merged into a stored alert (PATCH body)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertUpdate {
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: Option<AlertSeverity>,
    pub is_read: Option<bool>,
    pub action_taken: Option<String>,
}

impl AlertUpdate {
    pub fn apply_to(self, alert: &mut Alert) {
        if let Some(title) = self.title {
            alert.title = title;
        }
        if let Some(message) = self.message {
            alert.message = message;
        }
        if let Some(severity) = self.severity {
            alert.severity = severity;
        }
        if let Some(read) = self.is_read {
            alert.is_read = read;
        }
        if self.action_taken.is_some() {
            alert.action_taken = self.action_taken;
        }
    }
}
