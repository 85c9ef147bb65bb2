// Dictionary source discovery and multi-source compilation.
//
// Sources are referred to by bare file name (e.g. "subjectKeywords.txt") and
// located by walking the configured search root, so the dictionary can live
// anywhere inside a proceedings checkout.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use super::parser::parse_source;
use super::{CompileError, TermIndex};

/// Find the first file named `name` under `root`.
///
/// Walk order is deterministic (walkdir sorts by file name), so a name that
/// appears more than once always resolves to the same file.
pub fn locate_source(root: &Path, name: &str) -> Result<PathBuf, CompileError> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok);

    for entry in walker {
        if entry.file_type().is_file() && entry.file_name().to_string_lossy() == name {
            debug!(name, path = %entry.path().display(), "located dictionary source");
            return Ok(entry.into_path());
        }
    }

    Err(CompileError::SourceNotFound {
        name: name.to_string(),
        root: root.to_path_buf(),
    })
}

/// Compile every named source under `root` and merge the results in order.
///
/// Later sources overwrite earlier ones key-by-key, so a supplementary
/// dictionary can replace a term's path list without touching the rest of
/// the index. Any missing source fails the whole compile — no partial index
/// is ever returned.
pub fn compile_hierarchy(root: &Path, names: &[String]) -> Result<TermIndex, CompileError> {
    let mut merged = TermIndex::new();

    for name in names {
        let path = locate_source(root, name)?;
        let text = fs::read_to_string(&path).map_err(|err| match err.kind() {
            ErrorKind::InvalidData => CompileError::MalformedDictionary {
                path: path.clone(),
                reason: "not valid UTF-8 text".to_string(),
            },
            _ => CompileError::Io(err),
        })?;
        merged.merge(parse_source(name, &text));
    }

    info!(
        sources = names.len(),
        terms = merged.term_count(),
        paths = merged.path_count(),
        "compiled subject hierarchy"
    );
    Ok(merged)
}
