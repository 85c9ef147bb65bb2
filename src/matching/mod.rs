// Subject matching — scoring dictionary paths against document statistics.

pub mod engine;

use serde::Serialize;

use crate::hierarchy::SubjectPath;

/// Tunable thresholds for the match engine.
#[derive(Debug, Clone, Copy)]
pub struct MatchThresholds {
    /// Minimum occurrences before a document ngram may corroborate anything.
    /// Filters single-occurrence noise.
    pub min_frequency: u32,
    /// A path needs strictly more than this many corroborating ngrams before
    /// it is promoted out of the weak tier.
    pub min_corroboration: u32,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            min_frequency: 2,
            min_corroboration: 3,
        }
    }
}

/// Classified suggestions for one document.
///
/// `strong` and `weak` are sorted and deduplicated; `suggested_keyphrases`
/// is the extractor's ranked list, passed through untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchOutcome {
    pub strong: Vec<SubjectPath>,
    pub weak: Vec<SubjectPath>,
    pub suggested_keyphrases: Vec<String>,
}

impl MatchOutcome {
    pub fn is_empty(&self) -> bool {
        self.strong.is_empty() && self.weak.is_empty()
    }
}
