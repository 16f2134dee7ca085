//! Storage layer: the in-memory catalog and its seed data.
//!
//! Data lives in-memory in a [`Catalog`] that hands out immutable snapshots.
//! Nothing is written to disk; seed files are read once at startup.

/// Catalog store with copy-on-write snapshots.
pub mod catalog;
/// Built-in sample library and JSON seed file loading.
pub mod seed;

pub use catalog::Catalog;
pub use seed::{load_seed_file, sample_seed, CatalogSeed};
