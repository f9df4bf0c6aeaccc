//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Unrecognized enumeration value (travel mode, status, ...)
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create an unknown variant error
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("Vehicle", "42");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Vehicle");
                assert_eq!(id, "42");
            },
            _ => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("Vehicle", "42");
        assert_eq!(err.to_string(), "Vehicle not found: 42");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("at least 2 waypoints required".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: at least 2 waypoints required"
        );
    }

    #[test]
    fn unknown_variant_message() {
        let err = DomainError::unknown_variant("travel mode", "hovercraft");
        assert_eq!(err.to_string(), "Unknown travel mode: hovercraft");
    }
}
