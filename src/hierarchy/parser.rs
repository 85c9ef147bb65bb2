// Indentation parser for the subject dictionary format.
//
// One term per line; nesting depth is encoded as leading whitespace in units
// of 4 characters. The format predates the tool and has to be preserved
// bit-exactly, quirks included: non-multiple-of-4 indentation rounds down to
// the next lower depth (warned, not fatal), and a segment written as
// "Name (ACRONYM)" indexes under both the bare name and the acronym.

use regex_lite::Regex;
use tracing::{debug, warn};

use super::{SubjectPath, TermIndex, PATH_DELIMITER};

/// Whitespace characters per hierarchy level.
const INDENT_UNIT: usize = 4;

/// Compile one dictionary source (already read to a string) into a TermIndex.
///
/// `name` is only used for log context. Blank lines are skipped; every other
/// line contributes a path, so an empty source yields an empty index rather
/// than an error.
pub fn parse_source(name: &str, text: &str) -> TermIndex {
    let mut index = TermIndex::new();

    // Root-to-current chain of open ancestor terms. A line at depth d sees
    // the stack truncated to length d before its path is built, which
    // handles multi-level jumps (2 → 0) in one step.
    let mut ancestors: Vec<String> = Vec::new();

    for (lineno, raw) in text.lines().enumerate() {
        let term = raw.trim();
        if term.is_empty() {
            continue;
        }

        let indent = raw.len() - raw.trim_start().len();
        if indent % INDENT_UNIT != 0 {
            warn!(
                source = name,
                line = lineno + 1,
                indent,
                "indentation is not a multiple of {INDENT_UNIT}; rounding depth down"
            );
        }
        let depth = indent / INDENT_UNIT;

        if term.contains(PATH_DELIMITER) {
            warn!(
                source = name,
                line = lineno + 1,
                term,
                "term contains the path delimiter {PATH_DELIMITER:?}; rendered paths will be ambiguous"
            );
        }

        if ancestors.len() > depth {
            ancestors.truncate(depth);
        }

        let mut segments = ancestors.clone();
        segments.push(term.to_string());
        let path = SubjectPath::new(segments);

        // Every component of the path maps to it, not just the leaf, so a
        // document mentioning only an ancestor term still reaches the path.
        for segment in path.segments() {
            index.push(segment.to_lowercase(), path.clone());
        }

        ancestors.push(term.to_string());
    }

    let index = alias_acronyms(index);
    debug!(
        source = name,
        terms = index.term_count(),
        paths = index.path_count(),
        "compiled dictionary source"
    );
    index
}

/// Split composite `"name (ACRONYM)"` keys into two aliases.
///
/// Both the bare name and the acronym end up bound to the composite key's
/// path list; the composite key itself is removed so it can never shadow a
/// document match. Path strings keep the composite form — only index keys
/// are rewritten.
fn alias_acronyms(index: TermIndex) -> TermIndex {
    // Keys are lower-cased by the time aliasing runs, so \w matches the
    // acronym's lower-cased letters.
    let acronym = Regex::new(r"^(.+)\s+\((\w+)\)\s*$").expect("acronym pattern is valid");

    let composite: Vec<String> = index
        .terms()
        .filter(|term| acronym.is_match(term))
        .map(str::to_string)
        .collect();

    let mut index = index;
    for key in composite {
        let Some(paths) = index.remove(&key) else {
            continue;
        };
        let caps = acronym.captures(&key).expect("key matched during scan");
        let name = caps[1].to_string();
        let abbrev = caps[2].to_string();
        debug!(composite = %key, name = %name, acronym = %abbrev, "aliased acronym term");
        index.insert(name, paths.clone());
        index.insert(abbrev, paths);
    }
    index
}
