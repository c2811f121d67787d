//! Docview entry point.
//!
//! Scans the three export directories once, builds the immutable shared
//! state, and serves it over HTTP. Any directory that cannot be listed is
//! fatal: the process exits before binding the listener.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use docview::{AppState, Config, router};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let state = Arc::new(AppState::build(&config)?);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.effective_port()));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(port = addr.port(), "server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
