//! Embedded static assets.

/// Stylesheet served at `/doc.css`.
pub const DOC_CSS: &str = include_str!("../assets/doc.css");

/// Content type for the embedded stylesheet.
pub const DOC_CSS_TYPE: &str = "text/css; charset=utf-8";
