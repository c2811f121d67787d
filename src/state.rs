//! Shared application state.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! handlers via `Arc`. Nothing in it mutates afterward, so concurrent
//! requests read it without synchronization.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::catalog::{self, Document};
use crate::config::{BasicAuth, Config};
use crate::markdown::LinkRewriter;
use crate::name_index::NameIndex;

/// Immutable state shared by every request handler.
pub struct AppState {
    /// Markdown directory; document paths resolve directly against it.
    pub markdown_dir: PathBuf,
    /// Image directory; resolved image names are read from it.
    pub image_dir: PathBuf,
    /// Attachment directory; resolved attachment names are read from it.
    pub attachment_dir: PathBuf,
    /// Ordered document listing for the index page.
    pub documents: Vec<Document>,
    /// Short name to on-disk filename, image directory.
    pub images: NameIndex,
    /// Short name to on-disk filename, attachment directory.
    pub attachments: NameIndex,
    /// Compiled rewrite pipeline.
    pub rewriter: LinkRewriter,
    /// Shared credential; `None` disables the check.
    pub auth: Option<BasicAuth>,
}

impl AppState {
    /// Builds all process-wide state from the three export directories.
    ///
    /// # Errors
    ///
    /// Returns error if any directory cannot be listed or a rewrite
    /// pattern fails to compile. Both are fatal: the process must not
    /// start serving without a complete index.
    pub fn build(config: &Config) -> Result<Self> {
        let documents =
            catalog::scan(&config.markdown_dir).context("failed to scan markdown directory")?;
        let images =
            NameIndex::build(&config.image_dir).context("failed to index image directory")?;
        let attachments = NameIndex::build(&config.attachment_dir)
            .context("failed to index attachment directory")?;
        let rewriter = LinkRewriter::new().context("failed to compile rewrite rules")?;

        info!(
            documents = documents.len(),
            images = images.len(),
            attachments = attachments.len(),
            "export directories scanned"
        );

        Ok(Self {
            markdown_dir: config.markdown_dir.clone(),
            image_dir: config.image_dir.clone(),
            attachment_dir: config.attachment_dir.clone(),
            documents,
            images,
            attachments,
            rewriter,
            auth: config.basic_auth(),
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("documents", &self.documents.len())
            .field("images", &self.images.len())
            .field("attachments", &self.attachments.len())
            .field("auth", &self.auth.is_some())
            .finish_non_exhaustive()
    }
}
