//! Server-rendered HTML pages.

mod document;
mod index;

pub use document::generate as document_page;
pub use index::generate as index_page;

use maud::{DOCTYPE, Markup, html};

/// Wraps page content with standard HTML structure.
///
/// Provides consistent DOCTYPE, html, head, and body structure across both
/// page types. The embedded stylesheet is always loaded from `/doc.css`.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
fn page_wrapper(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/doc.css";
            }
            body {
                (body)
            }
        }
    }
}
