//! Binary entrypoint for the adforge API server.
use std::sync::Arc;

use adforge_api::{config::ApiConfig, metrics::ApiMetrics, run, AppState};
use adforge_client::GroqClient;
use adforge_engine::CampaignEngine;
use adforge_store::{HistoryStore, JsonFileHistory, MemoryHistory};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let provider = Arc::new(GroqClient::new(config.groq_api_key.clone()));
    let history: Arc<dyn HistoryStore> = match &config.history_path {
        Some(path) => {
            tracing::info!(path = %path, "using file-backed history");
            Arc::new(JsonFileHistory::new(path))
        }
        None => Arc::new(MemoryHistory::new()),
    };

    let engine = CampaignEngine::new(provider, history.clone()).with_model(config.model.clone());

    let state = AppState {
        engine: Arc::new(engine),
        history,
        metrics: Arc::new(ApiMetrics::new()),
    };

    run(&config.addr, state).await;
}
