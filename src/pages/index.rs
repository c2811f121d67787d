//! Document index page generation.

use maud::{Markup, html};

use super::page_wrapper;
use crate::catalog::Document;

/// Generates the index page listing every cataloged document.
///
/// Each entry links to its document page by filename. A document whose
/// title could not be read is listed under its filename instead, so it
/// stays reachable.
pub fn generate(documents: &[Document]) -> Markup {
    page_wrapper(
        "Documents",
        html! {
            h1 { "Documents" }
            ul class="document-list" {
                @for doc in documents {
                    li {
                        a href=(format!("/{}", doc.file_name)) {
                            @if doc.title.is_empty() {
                                (doc.file_name)
                            } @else {
                                (doc.title)
                            }
                        }
                    }
                }
            }
        },
    )
}
