//! Starscape catalog server.
//!
//! Serves the built star catalog over HTTP.
//!
//! # Usage
//!
//! ```bash
//! STARSCAPE_CATALOG=stars_60ly.json cargo run --bin starscape-server
//! ```
//!
//! # Environment Variables
//!
//! - `STARSCAPE_CONFIG`: path to `starscape.toml` (default: searched)
//! - `HOST`, `PORT`, `STARSCAPE_CATALOG`, `STARSCAPE_REPOSITORY`: override
//!   the `[server]` section
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use starscape::config::StarscapeConfig;
use starscape::db::RepositoryFactory;
use starscape::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Starscape catalog server");

    let config_path = env::var("STARSCAPE_CONFIG").ok().map(PathBuf::from);
    let config = StarscapeConfig::load(config_path.as_deref())?;

    let repository = RepositoryFactory::from_settings(&config.server)?;
    info!(
        "Repository initialized ({} stars)",
        repository.count().await?
    );

    let app = create_router(AppState::new(repository));

    let addr: SocketAddr = config.server.bind_address().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
