//! Shared test utilities for integration tests.
//!
//! Provides a builder for temporary export directory trees (markdown,
//! images, attachments) and for routers wired against them.

use axum::Router;
use docview::{AppState, Config};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Temporary export directory tree mirroring the DocBase layout.
pub struct ExportFixture {
    root: TempDir,
}

impl ExportFixture {
    /// Creates the three export directories under a fresh temp root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Should create temp dir");
        for dir in ["md", "img", "file"] {
            fs::create_dir(root.path().join(dir)).expect("Should create export dir");
        }
        Self { root }
    }

    /// Writes a markdown document into the export.
    pub fn write_document(&self, name: &str, content: &str) {
        fs::write(self.root.path().join("md").join(name), content)
            .expect("Should write document");
    }

    /// Writes an image file into the export.
    pub fn write_image(&self, name: &str, bytes: &[u8]) {
        fs::write(self.root.path().join("img").join(name), bytes).expect("Should write image");
    }

    /// Writes an attachment file into the export.
    pub fn write_attachment(&self, name: &str, bytes: &[u8]) {
        fs::write(self.root.path().join("file").join(name), bytes)
            .expect("Should write attachment");
    }

    /// Returns a configuration pointing at the fixture directories.
    pub fn config(&self) -> Config {
        self.config_with_auth("", "")
    }

    /// Returns a configuration with a shared credential enabled.
    pub fn config_with_auth(&self, user: &str, password: &str) -> Config {
        Config {
            port: 0,
            markdown_dir: self.path("md"),
            image_dir: self.path("img"),
            attachment_dir: self.path("file"),
            auth_user: user.to_string(),
            auth_password: password.to_string(),
        }
    }

    /// Builds the application router over the fixture.
    pub fn router(&self) -> Router {
        self.router_with_auth("", "")
    }

    /// Builds the application router with a shared credential enabled.
    pub fn router_with_auth(&self, user: &str, password: &str) -> Router {
        let config = self.config_with_auth(user, password);
        let state = AppState::build(&config).expect("Should build state");
        docview::router(Arc::new(state))
    }

    fn path(&self, dir: &str) -> PathBuf {
        self.root.path().join(dir)
    }
}
