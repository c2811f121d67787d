//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Docview.
#[derive(Debug, Clone, Parser)]
#[command(name = "docview", version, about, long_about = None)]
pub struct Config {
    /// TCP port to listen on (the PORT environment variable takes precedence)
    #[arg(short = 'p', long, default_value_t = 8080)]
    pub port: u16,

    /// Directory of the exported markdown files
    #[arg(short = 'm', long, default_value = "md")]
    pub markdown_dir: PathBuf,

    /// Directory of the exported images
    #[arg(short = 'i', long, default_value = "img")]
    pub image_dir: PathBuf,

    /// Directory of the exported attachments
    #[arg(short = 'f', long, default_value = "file")]
    pub attachment_dir: PathBuf,

    /// Basic auth username (empty disables the credential check)
    #[arg(long, default_value = "")]
    pub auth_user: String,

    /// Basic auth password
    #[arg(long, default_value = "")]
    pub auth_password: String,
}

/// Shared credential required on gated routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub user: String,
    pub password: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if any of the export directories does not exist.
    pub fn validate(&self) -> Result<()> {
        for (label, dir) in [
            ("markdown", &self.markdown_dir),
            ("image", &self.image_dir),
            ("attachment", &self.attachment_dir),
        ] {
            if !dir.is_dir() {
                bail!("{} directory does not exist: {}", label, dir.display());
            }
        }

        Ok(())
    }

    /// Returns the port to listen on.
    ///
    /// The `PORT` environment variable, when set to a valid port number,
    /// overrides the command line flag. An unparseable value is ignored.
    pub fn effective_port(&self) -> u16 {
        std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(self.port)
    }

    /// Returns the configured shared credential, if any.
    ///
    /// An empty username disables the credential check entirely.
    pub fn basic_auth(&self) -> Option<BasicAuth> {
        if self.auth_user.is_empty() {
            return None;
        }

        Some(BasicAuth {
            user: self.auth_user.clone(),
            password: self.auth_password.clone(),
        })
    }
}
