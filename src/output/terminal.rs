// Colored terminal output for subject suggestions and term tables.
//
// All terminal-specific formatting lives here; main.rs delegates display
// and only decides between this and JSON.

use colored::Colorize;

use crate::extract::stats::DocumentStatistics;
use crate::hierarchy::TermIndex;
use crate::matching::MatchOutcome;

use super::truncate_chars;

/// Display classified subject suggestions for one document.
pub fn display_suggestions(outcome: &MatchOutcome) {
    println!("\n{}", "=== Suggested Subjects ===".bold());
    println!();

    if outcome.is_empty() {
        println!(
            "  No dictionary subjects matched. The document may be too short,\n\
             \x20 or its topics may be missing from the dictionary — check the\n\
             \x20 suggested key phrases below."
        );
    }

    for path in &outcome.strong {
        println!(
            "  {}  {}",
            "High probability    ".bright_green().bold(),
            path.render()
        );
    }
    for path in &outcome.weak {
        println!(
            "  {}  {}",
            "Possible            ".yellow(),
            path.render()
        );
    }

    if !outcome.suggested_keyphrases.is_empty() {
        println!();
        println!(
            "{}",
            "=== Suggested Key Phrases (candidates for new subjects) ===".bold()
        );
        println!();
        for phrase in &outcome.suggested_keyphrases {
            println!("  {}", truncate_chars(phrase, 70).dimmed());
        }
    }
    println!();
}

/// Display the top-N ngram frequency table and keyphrases (`terms` command).
pub fn display_term_table(stats: &DocumentStatistics, top: usize) {
    println!("\n{}", format!("=== Top {top} Document Terms ===").bold());
    println!();
    println!("  {:>5}  {}", "Count".dimmed(), "Term".dimmed());
    println!("  {}", "-".repeat(50).dimmed());

    for (term, count) in stats.top_ngrams(top) {
        println!("  {count:>5}  {}", truncate_chars(term, 60));
    }

    if !stats.keyphrases.is_empty() {
        println!("\n{}", "=== Ranked Key Phrases ===".bold());
        println!();
        for (i, phrase) in stats.keyphrases.iter().enumerate() {
            println!("  {:>3}. {}", i + 1, truncate_chars(phrase, 70));
        }
    }
    println!();
}

/// Display compiled-dictionary statistics (`dict` command).
pub fn display_dict_stats(index: &TermIndex, sources: &[String]) {
    println!("\n{}", "=== Subject Dictionary ===".bold());
    println!();
    println!("  Sources: {}", sources.join(", "));
    println!("  Index terms (incl. aliases): {}", index.term_count());
    println!("  Distinct subject paths:      {}", index.path_count());
    println!("  Deepest nesting:             {}", index.max_depth());
    println!();
}
