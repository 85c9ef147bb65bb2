// Coverage scoring of hierarchical subject paths.
//
// A document term that matches an index key only nominates candidate paths;
// each candidate is then checked component by component against the full
// document vocabulary. Two counters run in parallel per path: "any coverage"
// (all ancestors present) and "strong coverage" (ancestors plus the leaf).
// Classification happens after all eligible terms are processed, so every
// corroborating ngram is counted before thresholds apply.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::extract::stats::DocumentStatistics;
use crate::hierarchy::{SubjectPath, TermIndex};

use super::{MatchOutcome, MatchThresholds};

/// Score every dictionary path reachable from the document's ngrams and
/// classify the survivors as strong or weak suggestions.
///
/// Empty statistics are not an error: the result carries empty suggestion
/// sets and whatever keyphrases were supplied. Document terms absent from
/// the index are expected and skipped silently.
pub fn match_subjects(
    index: &TermIndex,
    stats: &DocumentStatistics,
    thresholds: &MatchThresholds,
) -> MatchOutcome {
    // The vocabulary ignores the frequency floor on purpose: a rare term
    // cannot nominate a path, but it can still complete one nominated by a
    // frequent sibling.
    let vocabulary: HashSet<String> = stats.vocabulary();

    let mut any_coverage: HashMap<&SubjectPath, u32> = HashMap::new();
    let mut strong_coverage: HashMap<&SubjectPath, u32> = HashMap::new();

    for (term, frequency) in &stats.ngrams {
        if *frequency < thresholds.min_frequency {
            continue;
        }
        let Some(paths) = index.get(&term.to_lowercase()) else {
            continue;
        };
        debug!(term, frequency, candidates = paths.len(), "testing document ngram");

        for path in paths {
            // Explicit all-components check. Each component must be present
            // in the document vocabulary for the path to count as covered.
            let fully_covered = path
                .ancestors()
                .iter()
                .all(|ancestor| vocabulary.contains(&ancestor.to_lowercase()));
            if !fully_covered {
                continue;
            }

            *any_coverage.entry(path).or_insert(0) += 1;
            if vocabulary.contains(&path.leaf().to_lowercase()) {
                *strong_coverage.entry(path).or_insert(0) += 1;
            }
        }
    }

    let mut strong: Vec<SubjectPath> = Vec::new();
    let mut weak: Vec<SubjectPath> = Vec::new();

    // Leaf-inclusive coverage decides between the strong tier and a
    // moderate-confidence weak suggestion.
    for (path, count) in &strong_coverage {
        if *count > thresholds.min_corroboration {
            strong.push((*path).clone());
        } else {
            weak.push((*path).clone());
        }
    }

    // Paths whose leaf never appeared can still be worth suggesting when the
    // ancestor coverage was corroborated often enough.
    for (path, count) in &any_coverage {
        if strong_coverage.contains_key(path) {
            continue;
        }
        if *count > thresholds.min_corroboration {
            weak.push((*path).clone());
        }
    }

    strong.sort();
    strong.dedup();
    weak.sort();
    weak.dedup();

    info!(
        strong = strong.len(),
        weak = weak.len(),
        considered = any_coverage.len(),
        "classified subject suggestions"
    );

    MatchOutcome {
        strong,
        weak,
        suggested_keyphrases: stats.keyphrases.clone(),
    }
}
