// Keyterm extraction — the NLP front end the match engine consumes.

pub mod stats;
pub mod textrank;
pub mod traits;
