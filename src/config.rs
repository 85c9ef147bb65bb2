use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Default dictionary file names, searched in order. The supplementary file
/// is merged over the main one (last writer wins per term).
pub const DEFAULT_DICT_SOURCES: &[&str] = &["subjectKeywords.txt", "newKeywords.txt"];

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy; everything
/// has a working default so `papertag suggest` runs out of the box from a
/// proceedings checkout.
pub struct Config {
    /// Root directory searched (recursively) for dictionary files.
    pub dict_root: PathBuf,
    /// Dictionary file names, merged in order.
    pub dict_sources: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let dict_root = env::var("PAPERTAG_DICT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let dict_sources: Vec<String> = match env::var("PAPERTAG_DICT_SOURCES") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => DEFAULT_DICT_SOURCES.iter().map(|s| s.to_string()).collect(),
        };

        if dict_sources.is_empty() {
            anyhow::bail!(
                "PAPERTAG_DICT_SOURCES is set but names no files.\n\
                 Provide a comma-separated list, e.g. subjectKeywords.txt,newKeywords.txt"
            );
        }

        Ok(Self {
            dict_root,
            dict_sources,
        })
    }
}
