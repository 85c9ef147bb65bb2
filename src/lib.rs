// Papertag: subject-tag suggestions for conference papers.
//
// This is the library root. Each module corresponds to a stage of the
// tagging pipeline: extract document terms, compile the subject hierarchy,
// match one against the other, display the result.

pub mod config;
pub mod extract;
pub mod hierarchy;
pub mod matching;
pub mod output;
