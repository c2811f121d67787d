//! Markdown processing for exported documents.
//!
//! Raw source runs through two independent text passes (link rewriting and
//! emoji shortcode substitution) before comrak converts it to HTML.

mod emoji;
mod renderer;
mod rewrite;

pub use emoji::replace_shortcodes;
pub use renderer::MarkdownRenderer;
pub use rewrite::LinkRewriter;
