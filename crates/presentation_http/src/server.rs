//! Serving with a bounded graceful shutdown

use std::{future::Future, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// How the server stopped after the shutdown signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Open connections finished within the timeout
    Drained,
    /// The timeout elapsed and remaining connections were dropped
    TimedOut,
}

/// Serve `app` until `signal` resolves, then wait at most `timeout` for
/// open connections before aborting them
pub async fn serve_with_shutdown<S>(
    listener: TcpListener,
    app: Router,
    signal: S,
    timeout: Duration,
) -> std::io::Result<ShutdownOutcome>
where
    S: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                signal.await;
                let _ = signalled_tx.send(());
            })
            .await
    });

    // The sender only drops unsent when the server stopped on its own
    if signalled_rx.await.is_err() {
        return join(server.await).map(|()| ShutdownOutcome::Drained);
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);

    match tokio::time::timeout(timeout, &mut server).await {
        Ok(joined) => join(joined).map(|()| ShutdownOutcome::Drained),
        Err(_) => {
            warn!(?timeout, "Shutdown timeout elapsed, dropping open connections");
            server.abort();
            Ok(ShutdownOutcome::TimedOut)
        },
    }
}

fn join(
    joined: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> std::io::Result<()> {
    joined.map_err(std::io::Error::other)?
}
