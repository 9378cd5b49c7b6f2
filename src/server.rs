use std::sync::LazyLock;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime: u64,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
    })
}

/// Minimal HTTP endpoint so free-tier hosts keep the process alive.
/// Runs beside the gateway client for the lifetime of the process.
pub async fn run_keepalive(port: u16) -> Result<()> {
    let app = Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind keep-alive port {port}"))?;
    info!(port, "Keep-alive server listening");

    axum::serve(listener, app)
        .await
        .context("Keep-alive server exited")
}
