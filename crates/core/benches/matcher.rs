//! Matcher Benchmark: synthetic catalog of textbook records
//! Measures QPS and average latency of `search` for catalogs of growing size.
//!
//! Usage: cargo bench --bench matcher

use clgbooks_core::catalog::CatalogItem;
use clgbooks_core::search::{search, search_fallback};
use clgbooks_core::storage::sample_seed;
use std::time::Instant;

const SUBJECTS: [&str; 8] = [
    "Physics",
    "Mathematics",
    "Programming",
    "Electronics",
    "Thermodynamics",
    "Algorithms",
    "Chemistry",
    "Mechanics",
];

const QUALIFIERS: [&str; 6] = [
    "Engineering",
    "Applied",
    "Introduction to",
    "Advanced",
    "Fundamentals of",
    "Principles of",
];

const QUERIES: [&str; 6] = [
    "enginering physics",
    "algorithms",
    "dennis ritchie",
    "thermodynamcs",
    "calculus",
    "quantum chromodynamics",
];

fn synthetic_catalog(count: usize) -> Vec<CatalogItem> {
    (0..count)
        .map(|i| {
            let subject = SUBJECTS[i % SUBJECTS.len()];
            let qualifier = QUALIFIERS[(i / SUBJECTS.len()) % QUALIFIERS.len()];
            CatalogItem::new(format!("{qualifier} {subject} Vol. {i}"))
                .with_author(format!("Author {}", i % 97))
                .with_category(subject)
                .with_description(format!("Course textbook on {} for semester {}", subject.to_lowercase(), i % 8 + 1))
                .with_tags([subject.to_lowercase(), qualifier.to_lowercase()])
        })
        .collect()
}

fn main() {
    println!("=== Matcher Benchmark: synthetic textbook catalog ===");
    println!();

    println!("  Catalog size |    QPS    | Avg latency | Avg hits");
    println!("  -------------+-----------+-------------+---------");

    let sizes = [100, 1_000, 5_000, 20_000];
    let rounds = 50;

    for &size in &sizes {
        let items = synthetic_catalog(size);

        // Warm up
        for q in QUERIES {
            let _ = search(q, &items);
        }

        let t0 = Instant::now();
        let mut total_hits = 0usize;
        for _ in 0..rounds {
            for q in QUERIES {
                total_hits += search(q, &items).len();
            }
        }
        let elapsed = t0.elapsed();

        let num_queries = rounds * QUERIES.len();
        let qps = num_queries as f64 / elapsed.as_secs_f64();
        let avg_latency_us = elapsed.as_micros() as f64 / num_queries as f64;
        let avg_hits = total_hits as f64 / num_queries as f64;

        println!(
            "  {:>12} | {:>9.1} | {:>8.0} us | {:.2}",
            size, qps, avg_latency_us, avg_hits
        );
    }

    println!();
    println!("--- Fallback over sample links ---");
    let seed = sample_seed();
    let t0 = Instant::now();
    let mut hits = 0usize;
    for _ in 0..10_000 {
        for q in QUERIES {
            hits += search_fallback(q, &seed.external_resources).len();
        }
    }
    let elapsed = t0.elapsed();
    println!(
        "  {} queries in {:.2} ms ({} hits)",
        10_000 * QUERIES.len(),
        elapsed.as_secs_f64() * 1e3,
        hits
    );

    println!();
    println!("=== Benchmark complete ===");
}
