//! Markdown rendering for exported documents.

use comrak::Options;

/// Renders exported markdown to HTML.
///
/// Enables the extensions DocBase documents rely on: tables, strikethrough,
/// autolinks, and auto heading IDs. Raw HTML must pass through unchanged
/// because the link rewriter injects `<a>` and `<input>` markup into the
/// source before conversion.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates a renderer with the export-friendly option set.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.header_ids = Some(String::new());

        // Rewritten source carries raw HTML that must survive conversion
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Renders markdown content to an HTML string.
    pub fn render(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
