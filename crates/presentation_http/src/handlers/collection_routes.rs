//! Collection route handlers

use axum::{
    Json,
    extract::{Path, State},
};
use domain::CollectionRoute;
use tracing::instrument;

use super::common::parse_id;
use crate::{error::ApiError, state::AppState};

#[instrument(skip(state))]
pub async fn list_routes(
    State(state): State<AppState>,
) -> Result<Json<Vec<CollectionRoute>>, ApiError> {
    Ok(Json(state.fleet.routes().await?))
}

#[instrument(skip(state))]
pub async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CollectionRoute>, ApiError> {
    let id = parse_id(&id, "Route")?;
    Ok(Json(state.fleet.route(id).await?))
}

/// Routes assigned to a vehicle
#[instrument(skip(state))]
pub async fn routes_for_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<Vec<CollectionRoute>>, ApiError> {
    let vehicle_id = parse_id(&vehicle_id, "Vehicle")?;
    Ok(Json(state.fleet.routes_for_vehicle(vehicle_id).await?))
}
