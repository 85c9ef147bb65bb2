// Per-process compile cache for the subject hierarchy.
//
// The original tool kept the compiled dictionary in hidden module-level
// state. Here the cache is an explicit object constructed once at startup
// and passed to whatever needs it, so tests get a fresh cache per case.
// There is no invalidation: picking up dictionary edits takes a new process
// (or a new cache).

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::debug;

use super::sources::compile_hierarchy;
use super::{CompileError, TermIndex};

/// Caches one compiled `TermIndex` per distinct source-name sequence.
#[derive(Debug, Default)]
pub struct IndexCache {
    // Keyed by the requested names (order matters — merge is order
    // sensitive). The lock is held across compilation so concurrent first
    // calls cannot race into duplicate parses; afterwards every hit is a
    // cheap Arc clone.
    compiled: Mutex<HashMap<Vec<String>, Arc<TermIndex>>>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the compiled index for `names` under `root`, compiling on the
    /// first request and serving the cached result thereafter. A failed
    /// compile caches nothing, so the next call retries.
    pub fn get_or_compile(
        &self,
        root: &Path,
        names: &[String],
    ) -> Result<Arc<TermIndex>, CompileError> {
        let mut compiled = self.compiled.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(index) = compiled.get(names) {
            debug!(sources = ?names, "hierarchy cache hit");
            return Ok(Arc::clone(index));
        }

        let index = Arc::new(compile_hierarchy(root, names)?);
        compiled.insert(names.to_vec(), Arc::clone(&index));
        Ok(index)
    }
}
