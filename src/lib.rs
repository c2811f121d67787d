//! Local web viewer for DocBase export directories.

mod assets;
mod catalog;
mod config;
mod markdown;
mod name_index;
mod pages;
mod server;
mod sniff;
mod state;

pub use catalog::{Document, head, head_and_body, scan};
pub use config::{BasicAuth, Config};
pub use markdown::{LinkRewriter, MarkdownRenderer, replace_shortcodes};
pub use name_index::NameIndex;
pub use server::router;
pub use sniff::detect_content_type;
pub use state::AppState;
