//! MCP gateway server surface.
//!
//! Library-only: embedders inject an editor connection, get an axum
//! router (or let `run` bind and serve it with graceful shutdown).

use animproto::EditorConnection;
use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::mcp::{handle_mcp, AppState};

/// Server configuration
pub struct ServeConfig {
    /// HTTP port to bind
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Health check endpoint
pub async fn handle_health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<Value> {
    let uptime = state.start_time.elapsed();

    Json(serde_json::json!({
        "status": "healthy",
        "uptime_secs": uptime.as_secs(),
        "version": env!("CARGO_PKG_VERSION"),
        "tools": ["manage_animation"],
    }))
}

/// Build the gateway router around an editor connection.
pub fn router(connection: Arc<dyn EditorConnection>) -> Router {
    let state = AppState::new(connection);

    Router::new()
        .route("/mcp", post(handle_mcp))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the MCP gateway server until shutdown.
pub async fn run(config: ServeConfig, connection: Arc<dyn EditorConnection>) -> Result<()> {
    let app = router(connection);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("animgate ready");
    info!("   MCP: POST http://{}/mcp", addr);
    info!("   Health: GET http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received SIGINT, shutting down...");
        }
        _ = async {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{signal, SignalKind};
                let mut sigterm = signal(SignalKind::terminate()).expect("Failed to setup SIGTERM");
                sigterm.recv().await;
            }
            #[cfg(not(unix))]
            {
                std::future::pending::<()>().await;
            }
        } => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
