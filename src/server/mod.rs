//! HTTP API server.
//!
//! Provides:
//! - `POST /api/check-headers` - JSON body `{ "url": ..., "userAgent": ... }`
//! - `GET /api/check-headers` - same fields as query parameters
//! - `/status` - JSON inspection counters
//! - `/metrics` - Prometheus-compatible metrics
//!
//! Inspections succeed with `200` and the result JSON. Failures return a JSON
//! `{ "error", "message" }` payload: `400` for invalid input, `502` for network
//! errors and redirect failures, `504` for timeouts.

mod handlers;
mod types;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;

use handlers::{check_headers_get, check_headers_post, metrics_handler, status_handler};
pub use types::{ApiError, ErrorBody, ServerState};

/// Builds the API router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/api/check-headers",
            get(check_headers_get).post(check_headers_post),
        )
        .route("/status", get(status_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Binds `addr` and serves the API until Ctrl-C.
///
/// In-flight inspections are allowed to finish after the signal; each is
/// bounded by the inspector's overall timeout.
pub async fn start_server(addr: SocketAddr, state: ServerState) -> Result<(), anyhow::Error> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", addr, e))?;

    log::info!("API server listening on http://{}/", addr);
    log::info!("  - Inspect: http://{}/api/check-headers", addr);
    log::info!("  - Status: http://{}/status", addr);
    log::info!("  - Metrics: http://{}/metrics", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    log::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, run until the process is killed
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received, draining in-flight inspections");
}
