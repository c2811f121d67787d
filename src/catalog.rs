//! Document catalog built from the exported markdown directory.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// One markdown file available for viewing.
///
/// The filename doubles as the public URL path segment. The title is the
/// first line of the file and may be empty when the file is empty or its
/// title could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub title: String,
}

/// Scans the markdown directory into an ordered document listing.
///
/// Files only; subdirectories are skipped. Order mirrors the directory
/// listing and is not guaranteed to be alphabetic. A title-read failure is
/// logged and yields an empty title without excluding the document.
///
/// # Errors
///
/// Returns error if the directory itself cannot be listed. Callers treat
/// this as fatal at startup.
pub fn scan(dir: impl AsRef<Path>) -> Result<Vec<Document>> {
    let dir = dir.as_ref();
    let listing =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut documents = Vec::new();
    for entry in listing {
        let entry = entry
            .with_context(|| format!("failed to read directory entry in {}", dir.display()))?;
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let Ok(file_name) = entry.file_name().into_string() else {
            continue;
        };
        let title = match head(&entry.path()) {
            Ok(title) => title,
            Err(err) => {
                warn!(path = %entry.path().display(), error = %err, "failed to read title");
                String::new()
            }
        };
        documents.push(Document { file_name, title });
    }

    Ok(documents)
}

/// Reads the first line of a file, without its line terminator.
///
/// An empty file yields an empty title.
pub fn head(path: impl AsRef<Path>) -> io::Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().next().unwrap_or_default().to_string())
}

/// Splits a document into its title line and the remaining body.
///
/// The body joins every remaining line with a trailing newline each,
/// matching line-scanner semantics: `\r\n` terminators are normalized to
/// `\n` and a file with only a title yields an empty body.
pub fn head_and_body(path: impl AsRef<Path>) -> io::Result<(String, String)> {
    let content = fs::read_to_string(path)?;
    let mut lines = content.lines();
    let title = lines.next().unwrap_or_default().to_string();
    let body = lines.map(|line| format!("{line}\n")).collect();
    Ok((title, body))
}
