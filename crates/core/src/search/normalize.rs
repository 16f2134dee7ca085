//! Text normalization shared by the fuzzy matcher and the fallback search.
//!
//! Lowercases, trims, and collapses every whitespace run to a single space.
//! Punctuation is kept: "H.K. Malik" stays distinguishable from "HK Malik".

/// Normalize text into a char vector ready for edit-distance alignment.
pub fn normalize(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Normalize text into a `String` (used for substring containment).
pub fn normalize_str(text: &str) -> String {
    normalize(text).into_iter().collect()
}
