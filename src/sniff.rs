//! Content type detection from file bytes.
//!
//! Served files are typed by their content, never by their filename
//! extension: exported attachment names are user controlled and unreliable.

/// Detects the content type of a byte payload.
///
/// Magic-byte detection first; valid UTF-8 falls back to plain text,
/// everything else to an opaque octet stream.
pub fn detect_content_type(content: &[u8]) -> &'static str {
    if let Some(kind) = infer::get(content) {
        return kind.mime_type();
    }

    if std::str::from_utf8(content).is_ok() {
        "text/plain; charset=utf-8"
    } else {
        "application/octet-stream"
    }
}
