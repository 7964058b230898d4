//! Report Page Server
//!
//! Serves the report as a web page, built with Axum. Every page load runs
//! a fresh aggregation pass; the sample size and theme come from the page's
//! query string.
//!
//! # Endpoints
//!
//! - `GET /?sample=<n>&theme=<light|dark>` - Themed report page
//! - `GET /api/report?sample=<n>` - Report as JSON
//! - `GET /health` - Liveness

mod routes;
mod state;

pub use routes::HealthResponse;
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::report_page))
        .route("/api/report", get(routes::report_json))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the server and run until a shutdown signal
pub async fn serve(state: AppState, config: &ServerConfig) -> std::io::Result<()> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Review Lag listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Review Lag shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
