//! Adforge API /v1: REST endpoints
pub mod config;
pub mod handlers;
pub mod metrics;
pub mod middleware;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use adforge_engine::CampaignEngine;
use adforge_store::HistoryStore;
use crate::metrics::ApiMetrics;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<CampaignEngine>,
    pub history: Arc<dyn HistoryStore>,
    pub metrics: Arc<ApiMetrics>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/generate", post(handlers::generate))
        .route("/v1/history", get(handlers::history))
        .route("/v1/export/pdf", post(handlers::export_pdf))
        .route("/v1/share", post(handlers::share))
        .route("/v1/health", get(handlers::health))
        .route("/v1/metrics", get(handlers::metrics_text))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

pub async fn run(addr: &str, state: AppState) {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("adforge API listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
