//! Document page generation.

use maud::{Markup, PreEscaped, html};

use super::page_wrapper;

/// Generates a document page from its title and pre-rendered HTML body.
///
/// The body has already been through the rewrite pipeline and markdown
/// conversion, so it is emitted unescaped.
pub fn generate(title: &str, html_body: &str) -> Markup {
    page_wrapper(
        title,
        html! {
            h1 { (title) }
            a class="back-link" href="/" { "← Documents" }
            article {
                (PreEscaped(html_body))
            }
        },
    )
}
