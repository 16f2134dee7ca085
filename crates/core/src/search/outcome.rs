//! Classification of a lookup into one of four disjoint outcomes.
//!
//! The matcher never produces user-facing text; callers classify what the
//! primary and fallback searches found and render their own message.

/// Which searches produced results for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    /// Catalog items matched, no external resources.
    Primary,
    /// No catalog item matched, external resources did.
    Fallback,
    /// Both catalog items and external resources.
    Both,
    /// Nothing matched.
    Neither,
}

impl MatchOutcome {
    pub fn classify(primary_found: bool, fallback_found: bool) -> Self {
        match (primary_found, fallback_found) {
            (true, false) => MatchOutcome::Primary,
            (false, true) => MatchOutcome::Fallback,
            (true, true) => MatchOutcome::Both,
            (false, false) => MatchOutcome::Neither,
        }
    }

    /// Stable lowercase label for metrics and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchOutcome::Primary => "primary",
            MatchOutcome::Fallback => "fallback",
            MatchOutcome::Both => "both",
            MatchOutcome::Neither => "neither",
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
