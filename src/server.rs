//! Local web boundary: serves the front end and exposes the probe engine

use crate::error::Result;
use crate::models::ScanConfig;
use crate::probe::ProbeEngine;
use crate::report::{self, ScanLog};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared state for the scan endpoint
#[derive(Clone)]
pub struct AppState {
    engine: Arc<ProbeEngine>,
    config: ScanConfig,
    log: ScanLog,
}

impl AppState {
    /// Creates server state around a default engine and a fresh run log
    pub fn new(config: ScanConfig) -> Self {
        Self {
            engine: Arc::new(ProbeEngine::with_defaults()),
            config,
            log: ScanLog::new(),
        }
    }

    /// Returns the run log for inspection
    pub fn log(&self) -> &ScanLog {
        &self.log
    }
}

/// Body of a scan request
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub url: Option<String>,
    #[serde(default)]
    pub advanced: bool,
}

/// Prefixes a scheme-less URL with https before it reaches the engine
fn normalize_target(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn scan(State(state): State<AppState>, Json(request): Json<ScanRequest>) -> impl IntoResponse {
    let url = match request.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "URL is required"})),
            )
                .into_response();
        }
    };

    let mut config = state.config.clone();
    config.target = normalize_target(&url);
    config.advanced = request.advanced;

    match state.engine.run(&config).await {
        Ok(report) => {
            state.log.push(report.clone()).await;
            // Persistence failure is logged and stays invisible to the caller
            if let Err(e) = report::json::save(&report, &config.log_dir) {
                warn!("Failed to persist scan report: {e}");
            }
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/scan", post(scan))
        .with_state(state)
}

/// Binds to localhost on the given port and serves until shutdown
pub async fn serve(port: u16, state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running at http://{addr}/");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
