//! Extraction helpers shared by handlers

use axum::extract::{Query, rejection::QueryRejection};
use serde::Deserialize;

use crate::error::ApiError;

/// Parse a numeric path id; anything else is an unknown record
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<u32, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("{entity} {raw} not found")))
}

/// Unwrap a query extractor, turning a rejection into a 400
pub(crate) fn query_or_bad_request<T>(
    query: Result<Query<T>, QueryRejection>,
) -> Result<T, ApiError> {
    query
        .map(|Query(inner)| inner)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DaysQuery {
    pub days: Option<usize>,
}
