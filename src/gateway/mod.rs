//! Axum HTTP gateway over the composer facade.
//!
//! - Request body size limit (64KB max)
//! - Request timeout (30s)
//! - JSON `{error}` bodies for every client error

mod handlers;

use handlers::{
    handle_compose, handle_get_job, handle_guidance_ingest, handle_guidance_search,
    handle_health, handle_library_ingest, handle_library_search, handle_list_jobs,
};

use crate::composer::Composer;
use crate::error::GatewayError;
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Maximum request body size (64KB)
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<Composer>,
}

/// `POST /compose` body. Fields are optional so a missing one maps to the
/// documented 400 instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeBody {
    pub intent: Option<String>,
    pub brand_id: Option<String>,
    #[serde(default)]
    pub constraints: Option<crate::contracts::JsonMap>,
    #[serde(default)]
    pub seed_library_ids: Option<Vec<String>>,
}

/// Query string shared by the two search endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(rename = "brandId")]
    pub brand_id: Option<String>,
    pub k: Option<usize>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/compose", post(handle_compose))
        .route("/jobs", get(handle_list_jobs))
        .route("/jobs/{id}", get(handle_get_job))
        .route("/library", post(handle_library_ingest))
        .route("/library/search", get(handle_library_search))
        .route("/guidance", post(handle_guidance_ingest))
        .route("/guidance/search", get(handle_guidance_search))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
}

/// Bind `addr` (`host:port`) and serve until Ctrl-C.
pub async fn run_gateway(addr: &str, composer: Arc<Composer>) -> Result<(), GatewayError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|error| GatewayError::Bind {
            addr: addr.to_string(),
            message: error.to_string(),
        })?;
    run_gateway_with_listener(listener, composer).await
}

/// Serve from a pre-bound listener until Ctrl-C.
pub async fn run_gateway_with_listener(
    listener: tokio::net::TcpListener,
    composer: Arc<Composer>,
) -> Result<(), GatewayError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "gateway listening");
    }

    let app = router(AppState { composer });
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|error| GatewayError::Serve(error.to_string()))
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {error}");
        std::future::pending::<()>().await;
    }
    tracing::info!("gateway shutting down");
}
