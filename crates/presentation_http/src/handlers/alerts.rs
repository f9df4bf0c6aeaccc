//! Alert handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use domain::{Alert, AlertUpdate};
use tracing::{info, instrument};

use super::common::{LimitQuery, parse_id, query_or_bad_request};
use crate::{error::ApiError, state::AppState};

/// Newest alerts first
#[instrument(skip(state, query))]
pub async fn list_alerts(
    State(state): State<AppState>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<Vec<Alert>>, ApiError> {
    let LimitQuery { limit } = query_or_bad_request(query)?;
    Ok(Json(state.fleet.alerts(limit).await?))
}

#[instrument(skip(state))]
pub async fn get_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Alert>, ApiError> {
    let id = parse_id(&id, "Alert")?;
    Ok(Json(state.fleet.alert(id).await?))
}

/// Merge the given fields into an alert (e.g. mark it read)
#[instrument(skip(state, body))]
pub async fn update_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AlertUpdate>, JsonRejection>,
) -> Result<Json<Alert>, ApiError> {
    let id = parse_id(&id, "Alert")?;
    let Json(update) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let alert = state.fleet.update_alert(id, update).await?;
    info!(alert_id = alert.id, is_read = alert.is_read, "Alert updated");
    Ok(Json(alert))
}
