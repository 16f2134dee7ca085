//! HTTP API layer built on Axum.
//!
//! Provides the chat lookup endpoint plus health and metrics. Includes
//! middleware for rate limiting, request timeouts, body size limits, metrics
//! collection, security headers, and request ID tracing.

/// API error types mapped to HTTP status codes.
pub mod errors;
/// HTTP request handlers and application state.
pub mod handlers;
/// Prometheus metrics recording and background collection.
pub mod metrics;
/// Request and response data transfer objects.
pub mod models;
/// User-facing chat messages for each match outcome.
pub mod presenter;

use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{body::Body, Router};
use clgbooks_core::config;
use handlers::AppState;
use std::time::{Duration, Instant};
use tower::buffer::BufferLayer;
use tower::limit::{ConcurrencyLimitLayer, RateLimitLayer};
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

async fn request_id_middleware(req: Request<Body>, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!("request", request_id = %request_id);
    async move {
        let mut response = next.run(req).await;
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response
                .headers_mut()
                .insert(HeaderName::from_static("x-request-id"), value);
        }
        response
    }
    .instrument(span)
    .await
}

async fn security_headers_middleware(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("no-referrer"),
    );
    response
}

async fn metrics_middleware(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let start = Instant::now();
    let response = next.run(req).await;
    metrics::record_request(&method, &path, response.status().as_u16(), start.elapsed());
    response
}

/// Builds the Axum router with all routes and middleware layers.
///
/// The middleware stack (outermost to innermost):
/// Rate limiting → Concurrency limit → Timeout → Body limit → CORS → Compression →
/// Trace → Security headers → Request ID → Metrics.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/api/chat", post(handlers::chat))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(config::MAX_REQUEST_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: tower::BoxError| async move {
                    if err.is::<tower::timeout::error::Elapsed>() {
                        StatusCode::REQUEST_TIMEOUT
                    } else {
                        StatusCode::TOO_MANY_REQUESTS
                    }
                }))
                .layer(BufferLayer::new(1024))
                .layer(ConcurrencyLimitLayer::new(config::MAX_CONCURRENT_REQUESTS))
                .layer(RateLimitLayer::new(
                    config::RATE_LIMIT_RPS,
                    Duration::from_secs(1),
                ))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config::REQUEST_TIMEOUT_SECS,
                ))),
        )
        .with_state(state)
}
