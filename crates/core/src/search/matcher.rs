//! Weighted multi-field fuzzy ranking over a catalog snapshot, plus the
//! substring fallback over external resources.
//!
//! Each item field is scored with [`Pattern::score`] (0 = exact occurrence,
//! 1 = no match) and the five field scores are combined as a weighted geometric
//! mean:
//!
//! ```text
//! score(item) = Π max(s_f, ε) ^ w_f      with Σ w_f = 1
//! ```
//!
//! An absent field scores 1.0 like any non-matching field, so it contributes
//! `1.0 ^ w_f` and the remaining weights are never rescaled. Items above the
//! acceptance threshold are dropped, the rest are stably sorted by ascending score
//! (ties keep snapshot order) and cut to the result cap.

use crate::catalog::{CatalogItem, ExternalResource};
use crate::config;
use crate::search::normalize::normalize_str;
use crate::search::similarity::{Pattern, NO_MATCH};
use crate::search::types::{Field, FieldWeights, ScoredItem};
use ordered_float::OrderedFloat;

/// Fuzzy catalog matcher configuration.
///
/// Stateless: every call receives the snapshot to search, nothing is cached
/// between calls, so one matcher can serve concurrent requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogMatcher {
    pub weights: FieldWeights,
    /// Per-field edit budget relative to query length.
    pub field_threshold: f64,
    /// Maximum combined score an item may have to be kept.
    pub acceptance_threshold: f64,
    /// Maximum number of items returned by [`CatalogMatcher::search`].
    pub max_results: usize,
}

impl Default for CatalogMatcher {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            field_threshold: config::FIELD_MATCH_THRESHOLD,
            acceptance_threshold: config::ACCEPTANCE_THRESHOLD,
            max_results: config::MAX_RESULTS,
        }
    }
}

impl CatalogMatcher {
    /// Returns the best-matching items, best first, at most `max_results`.
    ///
    /// An empty result means no item cleared the acceptance threshold.
    pub fn search<'a>(&self, query: &str, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        self.rank(query, items)
            .into_iter()
            .take(self.max_results)
            .map(|scored| scored.item)
            .collect()
    }

    /// Scores every item and returns all accepted ones sorted by ascending score.
    ///
    /// Ties keep their order in `items`. An empty (or whitespace-only) query
    /// matches nothing.
    pub fn rank<'a>(&self, query: &str, items: &'a [CatalogItem]) -> Vec<ScoredItem<'a>> {
        let pattern = Pattern::with_threshold(query, self.field_threshold);
        if pattern.is_empty() || items.is_empty() {
            return Vec::new();
        }

        let mut accepted: Vec<ScoredItem<'a>> = items
            .iter()
            .map(|item| ScoredItem {
                item,
                score: self.score_item(&pattern, item),
            })
            .filter(|scored| scored.score <= self.acceptance_threshold)
            .collect();

        // Stable: equal scores keep snapshot order.
        accepted.sort_by_key(|scored| OrderedFloat(scored.score));

        tracing::debug!(
            candidates = items.len(),
            accepted = accepted.len(),
            "catalog ranked"
        );
        accepted
    }

    /// Combined score of one item for a prepared pattern, in `[0, 1]`.
    pub fn score_item(&self, pattern: &Pattern, item: &CatalogItem) -> f64 {
        Field::ALL
            .iter()
            .map(|&field| {
                let s = field
                    .text(item)
                    .map_or(NO_MATCH, |text| pattern.score(&text));
                s.max(f64::EPSILON).powf(self.weights.get(field))
            })
            .product()
    }

    /// Case-insensitive substring search over external resources.
    ///
    /// A resource is kept when the normalized query occurs in its title or
    /// description. No scoring, no threshold, snapshot order preserved.
    pub fn search_fallback<'a>(
        &self,
        query: &str,
        resources: &'a [ExternalResource],
    ) -> Vec<&'a ExternalResource> {
        let needle = normalize_str(query);
        if needle.is_empty() {
            return Vec::new();
        }
        resources
            .iter()
            .filter(|res| {
                normalize_str(&res.title).contains(&needle)
                    || res
                        .description
                        .as_deref()
                        .is_some_and(|d| normalize_str(d).contains(&needle))
            })
            .collect()
    }
}

/// [`CatalogMatcher::search`] with the default configuration.
pub fn search<'a>(query: &str, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
    CatalogMatcher::default().search(query, items)
}

/// [`CatalogMatcher::search_fallback`] with the default configuration.
pub fn search_fallback<'a>(
    query: &str,
    resources: &'a [ExternalResource],
) -> Vec<&'a ExternalResource> {
    CatalogMatcher::default().search_fallback(query, resources)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("Engineering Physics")
                .with_author("H.K. Malik")
                .with_category("Physics")
                .with_description("Comprehensive engineering physics textbook")
                .with_tags(["physics", "engineering", "mechanics"]),
            CatalogItem::new("C Programming Language")
                .with_author("Dennis Ritchie")
                .with_category("Programming")
                .with_description("The classic C programming book")
                .with_tags(["c", "programming", "computer science"]),
            CatalogItem::new("Data Structures and Algorithms")
                .with_author("Cormen")
                .with_category("Computer Science")
                .with_description("Introduction to algorithms")
                .with_tags(["algorithms", "data structures", "programming"]),
            CatalogItem::new("Engineering Mathematics")
                .with_author("B.S. Grewal")
                .with_category("Mathematics")
                .with_description("Higher engineering mathematics")
                .with_tags(["mathematics", "calculus", "engineering"]),
            CatalogItem::new("Digital Electronics")
                .with_author("Morris Mano")
                .with_category("Electronics")
                .with_description("Digital design fundamentals")
                .with_tags(["electronics", "digital", "logic gates"]),
        ]
    }

    fn titles(results: &[&CatalogItem]) -> Vec<String> {
        results.iter().map(|i| i.title.clone()).collect()
    }

    // ── Scenarios ──────────────────────────────────────────────────────

    #[test]
    fn test_misspelled_query_finds_title() {
        let items = vec![CatalogItem::new("Engineering Physics").with_author("H.K. Malik")];
        let results = search("enginering physics", &items);
        assert_eq!(titles(&results), vec!["Engineering Physics"]);
    }

    #[test]
    fn test_misspelled_query_tops_full_library() {
        let items = library();
        let results = search("enginering physics", &items);
        assert_eq!(results[0].title, "Engineering Physics");
    }

    #[test]
    fn test_keyword_ranks_matching_book_first() {
        let items = vec![
            CatalogItem::new("C Programming Language")
                .with_author("Dennis Ritchie")
                .with_category("Programming")
                .with_tags(["c", "programming"]),
            CatalogItem::new("Data Structures and Algorithms")
                .with_author("Cormen")
                .with_category("Computer Science")
                .with_tags(["algorithms", "data structures"]),
        ];
        let results = search("algorithms", &items);
        assert!(!results.is_empty());
        assert_eq!(results[0].title, "Data Structures and Algorithms");
    }

    #[test]
    fn test_no_match_then_fallback() {
        let items = library();
        assert!(search("quantum chromodynamics", &items).is_empty());

        let links = vec![
            ExternalResource::new("NPTEL Online Courses", "https://nptel.ac.in"),
            ExternalResource::new(
                "Quantum Chromodynamics Notes",
                "https://example.edu/qcd.pdf",
            ),
        ];
        let fallback = search_fallback("quantum chromodynamics", &links);
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].title, "Quantum Chromodynamics Notes");
    }

    #[test]
    fn test_generic_query_returns_best_three_with_stable_ties() {
        let items = vec![
            CatalogItem::new("Enginering Graphics"),
            CatalogItem::new("Workshop Practice").with_tags(["engineering", "workshop"]),
            CatalogItem::new("Engineering Drawing"),
            CatalogItem::new("Engineering Chemistry")
                .with_description("First year engineering chemistry")
                .with_tags(["engineering", "chemistry"]),
            CatalogItem::new("Basic Electrical Engineering").with_category("Electrical"),
        ];
        let matcher = CatalogMatcher::default();
        let ranked = matcher.rank("engineering", &items);
        assert_eq!(ranked.len(), 5, "all five clear the threshold");

        let results = matcher.search("engineering", &items);
        assert_eq!(
            titles(&results),
            vec![
                "Engineering Chemistry",
                "Engineering Drawing",
                "Basic Electrical Engineering",
            ]
        );
    }

    #[test]
    fn test_absent_author_scores_as_no_match() {
        let matcher = CatalogMatcher::default();
        let pattern = Pattern::new("engineering physics");
        let without = CatalogItem::new("Engineering Physics");
        let unrelated = CatalogItem::new("Engineering Physics").with_author("Zzyzx");

        let a = matcher.score_item(&pattern, &without);
        let b = matcher.score_item(&pattern, &unrelated);
        assert_eq!(a, b);
        assert!(a <= config::ACCEPTANCE_THRESHOLD);
        assert_eq!(search("engineering physics", &[without]).len(), 1);
    }

    // ── Properties ─────────────────────────────────────────────────────

    #[test]
    fn test_search_is_deterministic() {
        let items = library();
        for query in ["engineering", "programming", "enginering physics", "digital"] {
            let first: Vec<_> = search(query, &items).iter().map(|i| i.id).collect();
            for _ in 0..5 {
                let again: Vec<_> = search(query, &items).iter().map(|i| i.id).collect();
                assert_eq!(first, again, "query {query}");
            }
        }
    }

    #[test]
    fn test_rank_is_sorted_ascending() {
        let items = library();
        for query in ["engineering", "programming", "electronics", "mathematics"] {
            let ranked = CatalogMatcher::default().rank(query, &items);
            for pair in ranked.windows(2) {
                assert!(pair[0].score <= pair[1].score, "query {query}");
            }
        }
    }

    #[test]
    fn test_scores_within_unit_range_and_threshold() {
        let items = library();
        let matcher = CatalogMatcher::default();
        for scored in matcher.rank("programming", &items) {
            assert!(scored.score >= 0.0);
            assert!(scored.score <= config::ACCEPTANCE_THRESHOLD);
        }
        let pattern = Pattern::new("zzzz");
        for item in &items {
            let s = matcher.score_item(&pattern, item);
            assert_eq!(s, 1.0);
        }
    }

    #[test]
    fn test_cap_at_three() {
        let items: Vec<CatalogItem> = (0..50)
            .map(|i| CatalogItem::new(format!("Engineering Volume {i}")))
            .collect();
        let results = search("engineering", &items);
        assert_eq!(results.len(), config::MAX_RESULTS);
        assert_eq!(results[0].title, "Engineering Volume 0");
        assert_eq!(results[2].title, "Engineering Volume 2");
    }

    #[test]
    fn test_title_outranks_tags_for_same_match() {
        let items = vec![
            CatalogItem::new("Lab Manual").with_tags(["thermodynamics"]),
            CatalogItem::new("Thermodynamics"),
        ];
        let results = search("thermodynamics", &items);
        assert_eq!(titles(&results), vec!["Thermodynamics", "Lab Manual"]);
    }

    #[test]
    fn test_author_only_query() {
        let items = library();
        let results = search("ritchie", &items);
        assert_eq!(titles(&results), vec!["C Programming Language"]);
    }

    #[test]
    fn test_empty_inputs() {
        let items = library();
        assert!(search("", &items).is_empty());
        assert!(search("   ", &items).is_empty());
        assert!(search("physics", &[]).is_empty());
        assert!(search("", &[]).is_empty());
        assert!(search_fallback("", &[ExternalResource::new("A", "u")]).is_empty());
        assert!(search_fallback("a", &[]).is_empty());
    }

    #[test]
    fn test_custom_result_cap() {
        let items = library();
        let matcher = CatalogMatcher {
            max_results: 1,
            ..CatalogMatcher::default()
        };
        assert_eq!(matcher.search("engineering", &items).len(), 1);
    }

    // ── Fallback ───────────────────────────────────────────────────────

    #[test]
    fn test_fallback_case_insensitive_title_or_description() {
        let links = vec![
            ExternalResource::new("MIT OpenCourseWare", "https://ocw.mit.edu")
                .with_description("Free lecture notes on Quantum Physics"),
            ExternalResource::new("Khan Academy", "https://khanacademy.org"),
            ExternalResource::new("QUANTUM computing primer", "https://example.org/qc"),
        ];
        let results = search_fallback("Quantum", &links);
        let found: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(found, vec!["MIT OpenCourseWare", "QUANTUM computing primer"]);
    }

    #[test]
    fn test_fallback_is_exact_substring_only() {
        let links = vec![ExternalResource::new(
            "Quantum Chromodynamics Notes",
            "https://example.edu/qcd.pdf",
        )];
        // One typo is enough to miss: no fuzziness in the fallback.
        assert!(search_fallback("quantum chromodynamix", &links).is_empty());
    }

    #[test]
    fn test_fallback_not_truncated() {
        let links: Vec<ExternalResource> = (0..5)
            .map(|i| ExternalResource::new(format!("Calculus notes {i}"), "https://x"))
            .collect();
        let results = search_fallback("calculus", &links);
        assert_eq!(results.len(), 5);
        assert_eq!(results[4].title, "Calculus notes 4");
    }
}
