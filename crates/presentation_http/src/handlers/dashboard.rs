//! Dashboard summary handler

use application::DashboardSummary;
use axum::{Json, extract::State};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

#[instrument(skip(state))]
pub async fn summary(State(state): State<AppState>) -> Result<Json<DashboardSummary>, ApiError> {
    Ok(Json(state.fleet.dashboard_summary().await?))
}
