//! Bounded approximate substring matching.
//!
//! Scores how well a pattern occurs *somewhere* in a text using optimal string
//! alignment distance (Damerau-Levenshtein restricted to adjacent transpositions)
//! in its semi-global form: the whole pattern must be consumed, while text before
//! and after the aligned region is free.
//!
//! Edit costs: substitution = 1, insertion = 1, deletion = 1, transposition = 1.
//! The score is `distance / pattern_len` in `[0, 1]`, `0.0` being an exact occurrence.
//! Distances above `floor(pattern_len * threshold)` are treated as no match and score `1.0`.

use crate::config;
use crate::search::normalize::normalize;

/// Score returned for fields that do not match.
pub const NO_MATCH: f64 = 1.0;

/// A normalized query, prepared once and scored against many texts.
#[derive(Debug, Clone)]
pub struct Pattern {
    chars: Vec<char>,
    max_errors: usize,
}

impl Pattern {
    /// Prepares a pattern with the default per-field threshold.
    pub fn new(query: &str) -> Self {
        Self::with_threshold(query, config::FIELD_MATCH_THRESHOLD)
    }

    /// Prepares a pattern allowing `floor(len * threshold)` edits.
    pub fn with_threshold(query: &str, threshold: f64) -> Self {
        let chars = normalize(query);
        let max_errors = (chars.len() as f64 * threshold.clamp(0.0, 1.0)).floor() as usize;
        Self { chars, max_errors }
    }

    /// Returns `true` if the normalized pattern is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of chars in the normalized pattern.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Maximum edit distance still accepted as a match.
    pub fn max_errors(&self) -> usize {
        self.max_errors
    }

    /// Scores `text` against this pattern. See the module docs for the cost model.
    pub fn score(&self, text: &str) -> f64 {
        if self.chars.is_empty() {
            return NO_MATCH;
        }
        let text = normalize(text);
        if text.is_empty() {
            return NO_MATCH;
        }
        if contains(&text, &self.chars) {
            return 0.0;
        }
        match bounded_distance(&self.chars, &text, self.max_errors) {
            Some(d) => d as f64 / self.chars.len() as f64,
            None => NO_MATCH,
        }
    }
}

/// Scores how well `pattern` occurs in `text`, in `[0, 1]` (lower is better).
pub fn similarity(pattern: &str, text: &str) -> f64 {
    Pattern::new(pattern).score(text)
}

fn contains(text: &[char], pattern: &[char]) -> bool {
    pattern.len() <= text.len() && text.windows(pattern.len()).any(|w| w == pattern)
}

/// Best semi-global OSA distance of `pattern` inside `text`, or `None` above `max_errors`.
///
/// Column-wise DP over the text with three rolling columns; `col[i]` is the cheapest
/// alignment of `pattern[..i]` ending at the current text position.
fn bounded_distance(pattern: &[char], text: &[char], max_errors: usize) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }

    // Column for the empty text prefix: i deletions.
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut prev2: Vec<usize> = vec![0; m + 1];
    let mut cur: Vec<usize> = vec![0; m + 1];
    let mut best = prev[m];

    for j in 0..text.len() {
        // Free start anywhere in the text.
        cur[0] = 0;
        for i in 1..=m {
            let cost = usize::from(pattern[i - 1] != text[j]);
            let mut v = (prev[i - 1] + cost)
                .min(prev[i] + 1)
                .min(cur[i - 1] + 1);
            if i > 1 && j > 0 && pattern[i - 1] == text[j - 1] && pattern[i - 2] == text[j] {
                v = v.min(prev2[i - 2] + 1);
            }
            cur[i] = v;
        }
        // Free end anywhere in the text.
        best = best.min(cur[m]);
        if best == 0 {
            break;
        }
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut cur);
    }

    (best <= max_errors).then_some(best)
}
