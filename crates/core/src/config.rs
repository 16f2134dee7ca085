//! Global configuration constants for clgbooks.
//!
//! All matcher tuning parameters, input limits, and server defaults are defined here.
//! These are compile-time constants; runtime configuration is handled via CLI arguments
//! and environment variables in the server's `main.rs`.

/// Weight of the `title` field in the combined item score.
pub const FIELD_WEIGHT_TITLE: f64 = 0.40;

/// Weight of the `author` field in the combined item score.
pub const FIELD_WEIGHT_AUTHOR: f64 = 0.20;

/// Weight of the `category` field in the combined item score.
pub const FIELD_WEIGHT_CATEGORY: f64 = 0.20;

/// Weight of the `description` field in the combined item score.
pub const FIELD_WEIGHT_DESCRIPTION: f64 = 0.10;

/// Weight of the space-joined `tags` field in the combined item score.
pub const FIELD_WEIGHT_TAGS: f64 = 0.10;

/// Allowed deviation of the field weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Per-field edit budget, relative to the query length.
///
/// A field matches when its best approximate occurrence of the query needs at most
/// `floor(query_len * FIELD_MATCH_THRESHOLD)` edits. Otherwise the field scores 1.0.
pub const FIELD_MATCH_THRESHOLD: f64 = 0.4;

/// Maximum combined score (0 = perfect, 1 = unrelated) for an item to be kept.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.4;

/// Maximum number of catalog items returned by a primary search.
pub const MAX_RESULTS: usize = 3;

/// Maximum number of external resources the chat flow returns from the fallback search.
pub const MAX_FALLBACK_RESULTS: usize = 3;

/// Maximum length of a chat message in bytes.
pub const MAX_MESSAGE_BYTES: usize = 1_000;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default graceful shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Global rate limit in requests per second.
pub const RATE_LIMIT_RPS: u64 = 100;

/// Maximum HTTP request body size in bytes (64 KB).
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 512;

/// Interval in seconds between catalog gauge refreshes.
pub const METRICS_REFRESH_INTERVAL_SECS: u64 = 15;
