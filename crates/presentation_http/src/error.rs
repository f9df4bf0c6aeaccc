//! API error handling
//!
//! Every error response is a JSON object with a single `message` field.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::ServiceUnavailable(msg) => msg,
            Self::Internal(msg) => {
                error!(error = %msg, "Request failed");
                msg
            },
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::NotFound(what) => Self::NotFound(format!("{what} not found")),
            ApplicationError::Configuration(msg) | ApplicationError::LibraryLoad(msg) => {
                Self::ServiceUnavailable(msg)
            },
            e @ (ApplicationError::RoutingService { .. }
            | ApplicationError::Transport(_)
            | ApplicationError::ExternalService(_)
            | ApplicationError::Internal(_)) => Self::Internal(e.to_string()),
        }
    }
}
