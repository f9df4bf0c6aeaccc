//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Vehicles
        .route("/api/vehicles", get(handlers::vehicles::list_vehicles))
        .route("/api/vehicles/{id}", get(handlers::vehicles::get_vehicle))
        .route(
            "/api/vehicle/{vehicle_id}/routes",
            get(handlers::collection_routes::routes_for_vehicle),
        )
        .route(
            "/api/vehicle/{vehicle_id}/locations",
            get(handlers::vehicles::vehicle_locations),
        )
        // Collection routes
        .route("/api/routes", get(handlers::collection_routes::list_routes))
        .route("/api/routes/{id}", get(handlers::collection_routes::get_route))
        // Alerts
        .route("/api/alerts", get(handlers::alerts::list_alerts))
        .route(
            "/api/alerts/{id}",
            get(handlers::alerts::get_alert).patch(handlers::alerts::update_alert),
        )
        // Citizen reports and metrics
        .route(
            "/api/citizen-reports",
            get(handlers::citizen_reports::list_citizen_reports),
        )
        .route("/api/carbon-metrics", get(handlers::metrics::carbon_metrics))
        .route("/api/app-usage", get(handlers::metrics::app_usage))
        .route("/api/dashboard/summary", get(handlers::dashboard::summary))
        // Route preview
        .route("/api/route-preview", post(handlers::route_preview::preview))
        .with_state(state)
}

/// Router with the body limit applied
pub fn create_router_with_limits(state: AppState, server: &ServerConfig) -> Router {
    create_router(state).layer(DefaultBodyLimit::max(server.max_body_size_json_bytes))
}

/// CORS policy: any origin when none are configured, otherwise only those
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers(Any)
}
