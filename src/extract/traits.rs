// Document analyzer trait — swap-ready abstraction.
//
// The match engine only needs DocumentStatistics; how they are produced is
// behind this trait so the TextRank-based extractor can be replaced (e.g.
// with a lemmatizing pipeline) without touching the scoring code.

use anyhow::Result;

use super::stats::DocumentStatistics;

/// Turn raw document text into ngram frequencies and keyphrase suggestions.
pub trait DocumentAnalyzer {
    /// Analyze `text`, suggesting at most `max_keyphrases` free-text
    /// keyphrases alongside the full ngram frequency table.
    fn analyze(&self, text: &str, max_keyphrases: usize) -> Result<DocumentStatistics>;
}
