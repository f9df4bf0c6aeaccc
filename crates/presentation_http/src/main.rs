//! Fleet dashboard HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{FleetService, MapAssetLoader, MapLibrary, RoutingPort};
use chrono::Utc;
use infrastructure::{
    AppConfig, HttpMapAssetLoader, InMemoryFleetStore, RoutingAdapter, StaticMapAssetLoader,
    init_logging,
};
use presentation_http::{
    ShutdownOutcome, cors_layer, routes::create_router_with_limits, serve_with_shutdown,
    state::AppState,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.logging)?;
    info!("🚛 Fleet dashboard v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        routing = config.routing.is_configured(),
        "Configuration loaded"
    );

    let store = Arc::new(InMemoryFleetStore::with_sample_data(Utc::now()));
    let fleet = Arc::new(FleetService::new(store));

    let routing: Option<Arc<dyn RoutingPort>> = if config.routing.is_configured() {
        Some(Arc::new(RoutingAdapter::from_config(&config.routing)?))
    } else {
        warn!("Routing API key not set, route preview disabled");
        None
    };

    let loader: Arc<dyn MapAssetLoader> = if config.map.verify_assets {
        Arc::new(HttpMapAssetLoader::new(config.map.asset_timeout_secs)?)
    } else {
        Arc::new(StaticMapAssetLoader)
    };
    let map_library = MapLibrary::new(loader);

    let state = AppState::new(fleet, routing, map_library, config.map.clone());

    let app = create_router_with_limits(state, &config.server)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    match serve_with_shutdown(listener, app, shutdown_signal(), shutdown_timeout).await? {
        ShutdownOutcome::Drained => info!("👋 Server shutdown complete"),
        ShutdownOutcome::TimedOut => warn!("Server shutdown forced after timeout"),
    }
    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
