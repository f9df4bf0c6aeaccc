//! Headless route preview
//!
//! Runs a route view against a scene-recording map surface and returns what
//! a browser map would show for the given waypoints.

use std::sync::Arc;

use application::{MapRenderer, RouteView};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use domain::{RouteOptions, RouteResult, Waypoint, ensure_routable};
use infrastructure::{MapScene, SceneMapSurfaceFactory};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePreviewRequest {
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub options: RouteOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePreviewResponse {
    /// Calculated route, `null` when the calculation failed
    pub route: Option<RouteResult>,
    /// What the map shows after the calculation settled
    pub scene: Option<MapScene>,
    /// User-facing error banner, if any
    pub error: Option<String>,
}

#[instrument(skip(state, body))]
pub async fn preview(
    State(state): State<AppState>,
    body: Result<Json<RoutePreviewRequest>, JsonRejection>,
) -> Result<Json<RoutePreviewResponse>, ApiError> {
    let Some(routing) = state.routing.clone() else {
        return Err(ApiError::ServiceUnavailable(
            "Routing service not configured".to_string(),
        ));
    };

    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    ensure_routable(&request.waypoints).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let waypoint_count = request.waypoints.len();
    let factory = SceneMapSurfaceFactory::new();
    let renderer = MapRenderer::new(state.map.renderer_config(), Arc::new(factory.clone()));
    let view = RouteView::new(routing, Arc::clone(&state.map_library), renderer)
        .with_inputs(request.waypoints, request.options);

    view.mount().await;

    if let Some(message) = view.library_error() {
        view.unmount();
        return Err(ApiError::ServiceUnavailable(message));
    }

    let response = RoutePreviewResponse {
        route: view.route(),
        scene: factory.current_scene(),
        error: view.error(),
    };
    view.unmount();

    info!(
        waypoints = waypoint_count,
        routed = response.route.is_some(),
        "Route preview rendered"
    );
    Ok(Json(response))
}
