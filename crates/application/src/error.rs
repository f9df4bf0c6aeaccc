//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The routing service answered with a non-success status
    #[error("Routing API error: {status} {status_text}")]
    RoutingService {
        /// HTTP status code
        status: u16,
        /// Reason phrase
        status_text: String,
    },

    /// Network failure talking to an external service (DNS, reset, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Map assets could not be loaded
    #[error("Map library failed to load: {0}")]
    LibraryLoad(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Input was rejected before any external call
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Domain(DomainError::ValidationError(_) | DomainError::InvalidCoordinates(_))
        )
    }
}
