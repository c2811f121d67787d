//! Name resolution for exported image and attachment files.
//!
//! The DocBase export stores binary files as `<id>_<originalName>` while
//! documents reference them by `<originalName>` alone. This module builds
//! the in-memory mapping that turns the short public name back into the
//! actual on-disk filename.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Separator the export process inserts between numeric id and original name.
const NAME_SEPARATOR: char = '_';

/// Mapping from short public name to actual on-disk filename.
///
/// Built once at startup for a single flat directory; lookups are pure
/// in-memory reads with no disk I/O.
#[derive(Debug, Default)]
pub struct NameIndex {
    entries: HashMap<String, String>,
}

impl NameIndex {
    /// Builds the index from a flat directory listing.
    ///
    /// Keys are the suffix after the last separator in each filename; a
    /// filename without a separator maps to itself. Subdirectories are
    /// ignored entirely (no recursion). When two filenames share a suffix,
    /// the later-scanned entry overwrites the earlier one.
    ///
    /// # Arguments
    ///
    /// * `dir`: Directory containing exported files
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be listed. Callers treat this
    /// as fatal at startup.
    pub fn build(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let listing = fs::read_dir(dir)
            .with_context(|| format!("failed to read directory {}", dir.display()))?;

        let mut entries = HashMap::new();
        for entry in listing {
            let entry = entry
                .with_context(|| format!("failed to read directory entry in {}", dir.display()))?;
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                // Export names are produced by the service and are valid
                // UTF-8 in practice; anything else cannot be addressed by
                // an URL path segment anyway.
                continue;
            };
            entries.insert(link_key(&name).to_string(), name);
        }

        Ok(Self { entries })
    }

    /// Resolves a short public name to the actual on-disk filename.
    pub fn resolve(&self, link: &str) -> Option<&str> {
        self.entries.get(link).map(String::as_str)
    }

    /// Returns the number of indexed files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the directory contained no files.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the public link key for an exported filename.
///
/// The key is the substring after the last separator; the whole filename
/// when no separator is present.
fn link_key(file_name: &str) -> &str {
    match file_name.rfind(NAME_SEPARATOR) {
        Some(pos) => &file_name[pos + NAME_SEPARATOR.len_utf8()..],
        None => file_name,
    }
}
