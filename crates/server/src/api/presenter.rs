//! Chat reply text for each [`MatchOutcome`].
//!
//! The matcher returns structured results only; this module turns an outcome
//! and its counts into the sentence shown to the student.

use clgbooks_core::search::MatchOutcome;

/// Builds the reply for `outcome`.
///
/// `matched` is the total number of catalog books that cleared the threshold
/// (not just the ones returned), `links` the number of external links returned.
pub fn chat_message(outcome: MatchOutcome, matched: usize, links: usize) -> String {
    match outcome {
        MatchOutcome::Primary if matched == 1 => "I found the perfect match for you!".to_string(),
        MatchOutcome::Primary => {
            format!("I found {matched} matching books. Here are the best matches:")
        }
        MatchOutcome::Fallback if links == 1 => {
            "I couldn't find a PDF in our library, but here's an external resource that might help:"
                .to_string()
        }
        MatchOutcome::Fallback => {
            "I couldn't find a PDF in our library, but here are some external resources that might help:"
                .to_string()
        }
        MatchOutcome::Both if matched == 1 => {
            "I found a matching book, and some external resources that might help:".to_string()
        }
        MatchOutcome::Both => {
            format!("I found {matched} matching books, and some external resources that might help:")
        }
        MatchOutcome::Neither => "I couldn't find any matching books in our library. \
            Try different keywords or ask for a specific subject."
            .to_string(),
    }
}
