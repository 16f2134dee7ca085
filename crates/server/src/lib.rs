//! clgbooks-server — HTTP chat lookup service for the clgbooks library.
//!
//! Provides the HTTP API. Catalog records, the matcher and the catalog store
//! live in `clgbooks-core`.

/// HTTP API layer: Axum router, handlers, models, presenter, metrics.
pub mod api;
