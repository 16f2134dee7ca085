//! HTTP request handlers for the chat lookup API.
//!
//! Each handler extracts [`AppState`] via Axum's `State` extractor and returns
//! either a JSON response or an [`ApiError`].

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::*;
use crate::api::presenter;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use clgbooks_core::config;
use clgbooks_core::search::{CatalogMatcher, MatchOutcome};
use clgbooks_core::storage::Catalog;
use metrics_exporter_prometheus::PrometheusHandle;
use std::time::Instant;

/// Shared application state passed to all handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub matcher: CatalogMatcher,
    pub prometheus_handle: PrometheusHandle,
    pub start_time: Instant,
}

impl AppState {
    /// State with the default matcher, timed from now.
    pub fn new(catalog: Catalog, prometheus_handle: PrometheusHandle) -> Self {
        Self {
            catalog,
            matcher: CatalogMatcher::default(),
            prometheus_handle,
            start_time: Instant::now(),
        }
    }
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.start_time.elapsed().as_secs(),
            catalog_items: state.catalog.item_count(),
            external_resources: state.catalog.resource_count(),
        }),
    )
}

/// `POST /api/chat`: looks up catalog PDFs for a free-text message.
///
/// External links are consulted only when no catalog item matches.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    if req.message.len() > config::MAX_MESSAGE_BYTES {
        return Err(ApiError::BadRequest(format!(
            "Message exceeds {} bytes",
            config::MAX_MESSAGE_BYTES
        )));
    }

    let items = state.catalog.items_snapshot();
    let ranked = state.matcher.rank(&req.message, &items);
    let pdfs: Vec<PdfResponse> = ranked
        .iter()
        .take(state.matcher.max_results)
        .map(|scored| PdfResponse::from(scored.item))
        .collect();

    let external_links: Vec<ExternalLinkResponse> = if pdfs.is_empty() {
        let resources = state.catalog.resources_snapshot();
        state
            .matcher
            .search_fallback(&req.message, &resources)
            .into_iter()
            .take(config::MAX_FALLBACK_RESULTS)
            .map(ExternalLinkResponse::from)
            .collect()
    } else {
        Vec::new()
    };

    let outcome = MatchOutcome::classify(!pdfs.is_empty(), !external_links.is_empty());
    let message = presenter::chat_message(outcome, ranked.len(), external_links.len());

    metrics::record_chat(outcome, pdfs.len());
    tracing::info!(
        outcome = %outcome,
        matched = ranked.len(),
        pdfs = pdfs.len(),
        external_links = external_links.len(),
        "chat answered"
    );

    Ok(Json(ChatResponse {
        message,
        pdfs,
        external_links,
    }))
}

/// `GET /metrics`
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
