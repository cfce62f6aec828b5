//! API Handlers
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use adforge_core::{ArtifactKind, CampaignBrief, SessionContext, ADFORGE_VERSION};
use adforge_export::{share_links, LopdfRenderer, PdfRenderer, PdfSection};

use crate::{metrics, AppState};

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    #[serde(flatten)]
    pub brief: CampaignBrief,
    #[serde(default)]
    pub kind: Option<ArtifactKind>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> (StatusCode, Json<Value>) {
    state.metrics.generations.inc();

    let ctx = SessionContext::new();
    let kind = body.kind.unwrap_or(ArtifactKind::MultiPost);

    let mut request = state.engine.request(body.brief, kind);
    if let Some(model) = body.model {
        request.model = model;
    }
    if let Some(temperature) = body.temperature {
        request.sampling.temperature = temperature;
    }
    if let Some(max_tokens) = body.max_tokens {
        request.sampling.max_tokens = max_tokens;
    }

    match state.engine.run(&request, &ctx).await {
        Ok(result) => {
            state.metrics.outcomes.with_label_values(&["ok"]).inc();
            (StatusCode::OK, Json(json!(result)))
        }
        Err(e) => {
            state.metrics.outcomes.with_label_values(&["failed"]).inc();
            tracing::error!(trace_id = %ctx.trace_id, error = %e, "generation failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}

fn default_limit() -> usize {
    20
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> (StatusCode, Json<Value>) {
    match state.history.recent(query.limit) {
        Ok(entries) => (StatusCode::OK, Json(json!({ "entries": entries }))),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportBody {
    pub product: String,
    pub platform: String,
    pub ad_copy: String,
    #[serde(default)]
    pub image_prompt: String,
}

pub async fn export_pdf(Json(body): Json<ExportBody>) -> Response {
    let renderer = LopdfRenderer::default();
    let sections = [
        PdfSection {
            title: "Ad Copy".to_string(),
            body: body.ad_copy,
        },
        PdfSection {
            title: "Image Prompt".to_string(),
            body: body.image_prompt,
        },
    ];

    match renderer.render(&body.product, &body.platform, &sections) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/pdf")], bytes).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct ShareBody {
    pub text: String,
    pub link: String,
}

pub async fn share(Json(body): Json<ShareBody>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!(share_links(&body.text, &body.link))),
    )
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": ADFORGE_VERSION })),
    )
}

pub async fn metrics_text(State(state): State<AppState>) -> Response {
    match metrics::encode(&state.metrics.registry) {
        Ok(text) => (StatusCode::OK, text).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
