//! Vehicle handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use domain::{LocationRecord, Vehicle};
use tracing::instrument;

use super::common::{LimitQuery, parse_id, query_or_bad_request};
use crate::{error::ApiError, state::AppState};

/// List all vehicles
#[instrument(skip(state))]
pub async fn list_vehicles(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, ApiError> {
    Ok(Json(state.fleet.vehicles().await?))
}

/// Get one vehicle by store id
#[instrument(skip(state))]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, ApiError> {
    let id = parse_id(&id, "Vehicle")?;
    Ok(Json(state.fleet.vehicle(id).await?))
}

/// Recent positions of a vehicle, newest first
#[instrument(skip(state, query))]
pub async fn vehicle_locations(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<Vec<LocationRecord>>, ApiError> {
    let vehicle_id = parse_id(&vehicle_id, "Vehicle")?;
    let LimitQuery { limit } = query_or_bad_request(query)?;
    Ok(Json(
        state.fleet.vehicle_locations(vehicle_id, limit).await?,
    ))
}
