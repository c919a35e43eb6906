// Docs site server entry point
//
// Usage: cargo run --bin site_server

use anyhow::Context;
use ize_docs::{create_router, AppState, SiteConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, debug for request traces, warn for others
                    "ize_docs=info,tower_http=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting docs server...");

    let config = SiteConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  DOCS_DIR: {}", config.docs_dir.display());
    tracing::info!("  PAGES_DIR: {}", config.pages_dir.display());
    tracing::info!("  STATIC_DIR: {}", config.static_dir.display());
    tracing::info!("  MENU_FILE: {:?}", config.menu_file);
    tracing::info!("  CACHE_TTL: {:?}", config.cache_ttl);
    tracing::info!("  PORT: {}", config.port);

    let state = AppState::new(&config).context("Failed to initialize application state")?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
