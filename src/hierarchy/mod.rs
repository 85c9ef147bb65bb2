// Subject hierarchy — compiled dictionary types and errors.
//
// The controlled vocabulary is an indentation-structured term list. Compiling
// it yields a TermIndex: every individual term (and acronym alias) maps to the
// full hierarchical paths it participates in, at any depth.

pub mod cache;
pub mod parser;
pub mod sources;

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Delimiter used when a path is rendered as a flat string. Internal code
/// works on segments; the delimiter only appears at the I/O boundary.
/// Dictionary terms must not contain it — the parser warns if one does.
pub const PATH_DELIMITER: char = ':';

/// A root-to-leaf sequence of nested subject terms.
///
/// Segments keep the dictionary's original casing (matching is done against
/// lower-cased copies); the sequence is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectPath {
    segments: Vec<String>,
}

impl SubjectPath {
    /// Build a path from root→leaf segments. Panics on an empty sequence,
    /// which the parser never produces.
    pub fn new(segments: Vec<String>) -> Self {
        assert!(!segments.is_empty(), "a subject path has at least one segment");
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final (most specific) term of the path.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Every segment except the leaf. Empty for a bare top-level subject.
    pub fn ancestors(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Flat string form, e.g. `"Astronomy:Data Reduction:Pipelines"`.
    pub fn render(&self) -> String {
        self.segments.join(&PATH_DELIMITER.to_string())
    }
}

impl fmt::Display for SubjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for SubjectPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

impl<'de> Deserialize<'de> for SubjectPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Err(D::Error::custom("empty subject path"));
        }
        Ok(SubjectPath::new(
            raw.split(PATH_DELIMITER).map(str::to_string).collect(),
        ))
    }
}

/// Compiled dictionary: lower-cased term → every hierarchical path that
/// contains the term at any depth.
///
/// Path lists keep duplicates and insertion order — match scoring counts
/// occurrences, so a term repeated across dictionary lines weighs more.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermIndex {
    entries: HashMap<String, Vec<SubjectPath>>,
}

impl TermIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths bound to a term. Callers pass lower-cased terms; keys are
    /// lower-cased at insertion.
    pub fn get(&self, term: &str) -> Option<&[SubjectPath]> {
        self.entries.get(term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Append a path to a term's list, creating the entry if needed.
    pub fn push(&mut self, term: String, path: SubjectPath) {
        self.entries.entry(term).or_default().push(path);
    }

    /// Replace a term's entire path list.
    pub fn insert(&mut self, term: String, paths: Vec<SubjectPath>) {
        self.entries.insert(term, paths);
    }

    pub fn remove(&mut self, term: &str) -> Option<Vec<SubjectPath>> {
        self.entries.remove(term)
    }

    /// Number of distinct index keys (terms plus aliases).
    pub fn term_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Deepest nesting level across every path in the index.
    pub fn max_depth(&self) -> usize {
        self.entries
            .values()
            .flatten()
            .map(SubjectPath::depth)
            .max()
            .unwrap_or(0)
    }

    /// Number of distinct hierarchical paths across the whole index.
    pub fn path_count(&self) -> usize {
        let mut seen: std::collections::HashSet<&SubjectPath> = std::collections::HashSet::new();
        for paths in self.entries.values() {
            seen.extend(paths.iter());
        }
        seen.len()
    }

    /// Merge `later` into this index. A key present in both takes the later
    /// source's list wholesale — overwrite, never union.
    pub fn merge(&mut self, later: TermIndex) {
        self.entries.extend(later.entries);
    }
}

/// Failures while locating or compiling a dictionary source.
#[derive(Debug, Error)]
pub enum CompileError {
    /// No file by the requested name anywhere under the search root.
    #[error("no dictionary file named {name:?} found under {root}")]
    SourceNotFound { name: String, root: PathBuf },

    /// The file exists but its content is unreadable as a term list.
    #[error("dictionary {path} is malformed: {reason}")]
    MalformedDictionary { path: PathBuf, reason: String },

    #[error("dictionary I/O error: {0}")]
    Io(#[from] std::io::Error),
}
