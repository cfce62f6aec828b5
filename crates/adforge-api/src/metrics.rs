//! Prometheus metrics for the API surface.

use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

/// The registry plus the counters the handlers bump.
pub struct ApiMetrics {
    pub registry: Registry,
    /// Generation requests received
    pub generations: IntCounter,
    /// Generation outcomes by status label (ok / failed)
    pub outcomes: IntCounterVec,
}

impl ApiMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let generations = IntCounter::new(
            "adforge_generations_total",
            "Campaign generation requests received",
        )
        .expect("valid counter definition");
        let outcomes = IntCounterVec::new(
            Opts::new(
                "adforge_generation_outcomes_total",
                "Campaign generation outcomes",
            ),
            &["status"],
        )
        .expect("valid counter definition");

        registry
            .register(Box::new(generations.clone()))
            .expect("register generations counter");
        registry
            .register(Box::new(outcomes.clone()))
            .expect("register outcomes counter");

        Self {
            registry,
            generations,
            outcomes,
        }
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the registry as prometheus text exposition format.
pub fn encode(registry: &Registry) -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).to_string())
}
