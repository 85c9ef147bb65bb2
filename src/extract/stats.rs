// DocumentStatistics — the contract between the extractor and the match
// engine.
//
// Whatever produces these must already have excluded stop words and empty
// strings, and must report positive frequencies. The ngram list arrives
// ranked by descending frequency, but the engine treats it as an unordered
// multiset; the ordering is only used for top-N diagnostics.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Term statistics for one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentStatistics {
    /// (ngram, occurrence count) pairs, most frequent first.
    pub ngrams: Vec<(String, u32)>,
    /// Free-text keyphrase suggestions, ranked by the extractor. Opaque to
    /// the match engine — passed through to the caller unchanged.
    pub keyphrases: Vec<String>,
}

impl DocumentStatistics {
    /// Every distinct lower-cased document term, regardless of frequency.
    pub fn vocabulary(&self) -> HashSet<String> {
        self.ngrams
            .iter()
            .map(|(term, _)| term.to_lowercase())
            .collect()
    }

    /// The `n` most frequent ngrams, for diagnostics and the `terms`
    /// subcommand.
    pub fn top_ngrams(&self, n: usize) -> &[(String, u32)] {
        &self.ngrams[..self.ngrams.len().min(n)]
    }
}
