//! # clgbooks-core
//!
//! Catalog records, the fuzzy catalog matcher, and the in-memory catalog store
//! behind the clgbooks library lookup service.
//!
//! This is the core library crate with zero async dependencies. The matcher is a
//! pure function of `(query, snapshot)` and is safe to call from any number of
//! threads at once.

/// Catalog record types: `CatalogItem` and `ExternalResource`.
pub mod catalog;
/// Global configuration constants: weights, thresholds, limits, and defaults.
pub mod config;
/// Catalog search: fuzzy weighted ranking, substring fallback, and outcome classification.
pub mod search;
/// Storage layer: in-memory catalog with snapshots, and seed data.
pub mod storage;
