//! Catalog search: fuzzy weighted ranking, substring fallback, and outcome classification.
//!
//! The matcher is a pure function of `(query, snapshot)`. It keeps no index and no
//! cache; callers pass a fresh snapshot from the catalog store on every call.

/// Weighted multi-field ranking and the substring fallback.
pub mod matcher;
/// Text normalization shared by both searches.
pub mod normalize;
/// Four-way classification of primary/fallback results.
pub mod outcome;
/// Bounded approximate substring scoring.
pub mod similarity;
/// Field weights and scored results.
pub mod types;

pub use matcher::{search, search_fallback, CatalogMatcher};
pub use outcome::MatchOutcome;
pub use similarity::{similarity, Pattern};
pub use types::{Field, FieldWeights, ScoredItem};
