//! Carbon metric and app usage handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use domain::{AppUsage, CarbonMetric};
use tracing::instrument;

use super::common::{DaysQuery, query_or_bad_request};
use crate::{error::ApiError, state::AppState};

/// Daily carbon metrics, newest first (default 7 days)
#[instrument(skip(state, query))]
pub async fn carbon_metrics(
    State(state): State<AppState>,
    query: Result<Query<DaysQuery>, QueryRejection>,
) -> Result<Json<Vec<CarbonMetric>>, ApiError> {
    let DaysQuery { days } = query_or_bad_request(query)?;
    Ok(Json(state.fleet.carbon_metrics(days).await?))
}

/// App usage records, newest first (default 30 days)
#[instrument(skip(state, query))]
pub async fn app_usage(
    State(state): State<AppState>,
    query: Result<Query<DaysQuery>, QueryRejection>,
) -> Result<Json<Vec<AppUsage>>, ApiError> {
    let DaysQuery { days } = query_or_bad_request(query)?;
    Ok(Json(state.fleet.app_usage(days).await?))
}
