//! Citizen report handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use domain::CitizenReport;
use serde::Deserialize;
use tracing::instrument;

use super::common::query_or_bad_request;
use crate::{error::ApiError, state::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// All reports, or only those of `?type=`
#[instrument(skip(state, query))]
pub async fn list_citizen_reports(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<Vec<CitizenReport>>, ApiError> {
    let ReportQuery { kind } = query_or_bad_request(query)?;
    Ok(Json(state.fleet.citizen_reports(kind.as_deref()).await?))
}
