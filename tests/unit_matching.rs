// Integration tests for the match engine: eligibility and promotion
// thresholds, classification boundaries, and the sparse-document scenario.

use papertag::extract::stats::DocumentStatistics;
use papertag::hierarchy::parser::parse_source;
use papertag::matching::engine::match_subjects;
use papertag::matching::MatchThresholds;

fn stats(ngrams: &[(&str, u32)]) -> DocumentStatistics {
    DocumentStatistics {
        ngrams: ngrams.iter().map(|(t, c)| (t.to_string(), *c)).collect(),
        keyphrases: vec![],
    }
}

fn renders(paths: &[papertag::hierarchy::SubjectPath]) -> Vec<String> {
    paths.iter().map(|p| p.render()).collect()
}

// ============================================================
// Eligibility threshold (minimum ngram frequency)
// ============================================================

#[test]
fn frequency_one_never_corroborates() {
    let index = parse_source("test", "Astronomy\n");
    let outcome = match_subjects(
        &index,
        &stats(&[("astronomy", 1)]),
        &MatchThresholds::default(),
    );
    assert!(outcome.is_empty());
}

#[test]
fn frequency_two_does_corroborate() {
    let index = parse_source("test", "Astronomy\n");
    let outcome = match_subjects(
        &index,
        &stats(&[("astronomy", 2)]),
        &MatchThresholds::default(),
    );
    assert_eq!(renders(&outcome.weak), vec!["Astronomy"]);
}

#[test]
fn rare_term_still_completes_coverage_for_a_frequent_sibling() {
    // "pipelines" is too rare to nominate anything itself, but it sits in
    // the vocabulary, so the path nominated by "astronomy" is fully covered.
    let index = parse_source("test", "Astronomy\n    Pipelines\n");
    let outcome = match_subjects(
        &index,
        &stats(&[("astronomy", 5), ("pipelines", 1)]),
        &MatchThresholds::default(),
    );
    assert!(renders(&outcome.weak).contains(&"Astronomy:Pipelines".to_string()));
}

// ============================================================
// Strong/weak classification boundary (promotion threshold)
// ============================================================

const DEEP_DICT: &str = "Alpha\n    Beta\n        Gamma\n            Delta\n";

#[test]
fn four_corroborations_promote_to_strong() {
    let index = parse_source("test", DEEP_DICT);
    // All four component terms are eligible; each nominates the leaf path
    // once, so its strong counter reaches 4 > 3.
    let outcome = match_subjects(
        &index,
        &stats(&[("alpha", 5), ("beta", 5), ("gamma", 5), ("delta", 2)]),
        &MatchThresholds::default(),
    );
    assert!(renders(&outcome.strong).contains(&"Alpha:Beta:Gamma:Delta".to_string()));
}

#[test]
fn exactly_three_corroborations_stay_weak() {
    let index = parse_source("test", DEEP_DICT);
    // "delta" has frequency 1: it completes the vocabulary but cannot
    // nominate, leaving the strong counter at exactly 3 — not promoted.
    let outcome = match_subjects(
        &index,
        &stats(&[("alpha", 5), ("beta", 5), ("gamma", 5), ("delta", 1)]),
        &MatchThresholds::default(),
    );
    assert!(!renders(&outcome.strong).contains(&"Alpha:Beta:Gamma:Delta".to_string()));
    assert!(renders(&outcome.weak).contains(&"Alpha:Beta:Gamma:Delta".to_string()));
}

#[test]
fn promotion_threshold_is_tunable() {
    let index = parse_source("test", "Astronomy\n");
    let thresholds = MatchThresholds {
        min_frequency: 2,
        min_corroboration: 0,
    };
    // With the bar at zero, a single corroboration is enough
    let outcome = match_subjects(&index, &stats(&[("astronomy", 3)]), &thresholds);
    assert_eq!(renders(&outcome.strong), vec!["Astronomy"]);
}

// ============================================================
// Sparse-document scenario — one match per level stays weak
// ============================================================

#[test]
fn one_document_term_per_level_classifies_weak_not_strong() {
    let index = parse_source("test", "Astronomy\n    Data Reduction\n        Pipelines\n");
    let outcome = match_subjects(
        &index,
        &stats(&[("astronomy", 5), ("data reduction", 5), ("pipelines", 5)]),
        &MatchThresholds::default(),
    );

    // Three corroborations for the leaf path — never enough for strong with
    // the default threshold, however frequent the individual terms are.
    assert!(outcome.strong.is_empty());
    assert!(renders(&outcome.weak).contains(&"Astronomy:Data Reduction:Pipelines".to_string()));
}

// ============================================================
// Pass-through and edge cases
// ============================================================

#[test]
fn empty_statistics_are_not_an_error() {
    let index = parse_source("test", "Astronomy\n");
    let empty = DocumentStatistics {
        ngrams: vec![],
        keyphrases: vec!["wide-field imaging".to_string()],
    };
    let outcome = match_subjects(&index, &empty, &MatchThresholds::default());
    assert!(outcome.strong.is_empty());
    assert!(outcome.weak.is_empty());
    assert_eq!(outcome.suggested_keyphrases, vec!["wide-field imaging"]);
}

#[test]
fn acronym_alias_nominates_the_composite_path() {
    let index = parse_source("test", "Data Archives (DA)\n");
    // The composite leaf never appears verbatim in a document, so this path
    // can only ever reach the weak tier via ancestor ("any") coverage.
    let thresholds = MatchThresholds {
        min_frequency: 2,
        min_corroboration: 0,
    };
    let outcome = match_subjects(&index, &stats(&[("da", 4)]), &thresholds);
    assert!(outcome.strong.is_empty());
    assert!(renders(&outcome.weak).contains(&"Data Archives (DA)".to_string()));
}

#[test]
fn outcome_serializes_paths_as_flat_strings() {
    let index = parse_source("test", "Astronomy\n    Pipelines\n");
    let outcome = match_subjects(
        &index,
        &stats(&[("astronomy", 5), ("pipelines", 5)]),
        &MatchThresholds::default(),
    );
    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("\"Astronomy:Pipelines\""));
}
