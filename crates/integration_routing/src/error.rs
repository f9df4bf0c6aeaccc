//! Routing error types

use thiserror::Error;

/// Errors that can occur while calculating a route
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Fewer than two waypoints or otherwise unusable input; no request was sent
    #[error("Invalid waypoints: {0}")]
    InvalidWaypoints(String),

    /// The routing service answered with a non-success status
    #[error("Routing API error: {status} {status_text}")]
    ServiceError {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Response body did not match the expected route schema
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl RoutingError {
    /// Network-level failure (no HTTP status was received)
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout { .. })
    }

    /// HTTP status of a service error
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ServiceError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
