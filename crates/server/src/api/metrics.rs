//! Prometheus metrics recording and background collection.

use clgbooks_core::search::MatchOutcome;
use clgbooks_core::storage::Catalog;
use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Records HTTP request metrics.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records one answered chat request.
pub fn record_chat(outcome: MatchOutcome, results: usize) {
    counter!("clgbooks_chat_total", "outcome" => outcome.as_str()).increment(1);
    histogram!("clgbooks_chat_results").record(results as f64);
}

/// Updates catalog size gauges.
pub fn update_catalog_metrics(catalog: &Catalog) {
    gauge!("clgbooks_catalog_items").set(catalog.item_count() as f64);
    gauge!("clgbooks_external_resources").set(catalog.resource_count() as f64);
}
