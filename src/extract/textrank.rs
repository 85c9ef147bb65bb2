// TextRank-based document analyzer.
//
// Uses the `keyword_extraction` crate for ranked keyphrase suggestions and a
// local sliding-window pass for the ngram frequency table. Ngrams run from
// one up to `max_ngram_len` words; any window containing a stop word is
// dropped, which keeps the table free of "of the pipeline"-style noise.

use std::collections::HashMap;

use anyhow::Result;
use keyword_extraction::text_rank::{TextRank, TextRankParams};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};
use tracing::{debug, info};

use super::stats::DocumentStatistics;
use super::traits::DocumentAnalyzer;

/// How many of the most frequent ngrams to show in debug diagnostics.
const DIAGNOSTIC_NGRAMS: usize = 30;

/// TextRank analyzer — the default extractor.
///
/// Runs locally with no model downloads. Swappable via the DocumentAnalyzer
/// trait.
pub struct TextRankAnalyzer {
    /// Longest ngram (in words) counted into the frequency table.
    pub max_ngram_len: usize,
}

impl Default for TextRankAnalyzer {
    fn default() -> Self {
        Self { max_ngram_len: 3 }
    }
}

impl DocumentAnalyzer for TextRankAnalyzer {
    fn analyze(&self, text: &str, max_keyphrases: usize) -> Result<DocumentStatistics> {
        let stop_words: Vec<String> = get(LANGUAGE::English);

        let ngrams = count_ngrams(text, self.max_ngram_len, &stop_words);
        debug!(
            top = ?&ngrams[..ngrams.len().min(DIAGNOSTIC_NGRAMS)],
            "ngram frequency table (top, cleaned)"
        );

        // Ranked free-text phrase suggestions — candidates for terms the
        // controlled dictionary does not have yet.
        let keyphrases = if text.trim().is_empty() {
            Vec::new()
        } else {
            let text_rank = TextRank::new(TextRankParams::WithDefaults(text, &stop_words));
            text_rank.get_ranked_phrases(max_keyphrases)
        };

        info!(
            chars = text.len(),
            ngrams = ngrams.len(),
            keyphrases = keyphrases.len(),
            "analyzed document"
        );

        Ok(DocumentStatistics { ngrams, keyphrases })
    }
}

/// Count word ngrams of length 1..=`max_len`, excluding any window that
/// contains a stop word. Returns pairs sorted by descending frequency, ties
/// broken alphabetically so output is deterministic.
fn count_ngrams(text: &str, max_len: usize, stop_words: &[String]) -> Vec<(String, u32)> {
    let token_pattern = Regex::new(r"[a-z0-9][a-z0-9'-]*").expect("token pattern is valid");
    let stops: std::collections::HashSet<&str> =
        stop_words.iter().map(String::as_str).collect();

    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = token_pattern
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .collect();

    let mut counts: HashMap<String, u32> = HashMap::new();
    for len in 1..=max_len.max(1) {
        for window in tokens.windows(len) {
            if window.iter().any(|tok| stops.contains(tok)) {
                continue;
            }
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}
