//! LinkCollector server
//!
//! Serves the bookmark manager over HTTP from an in-memory store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use linkcollector_core::{seed::seed_demo_data, Config, Repository, Store};
use linkcollector_web::{create_router, AppState};

#[derive(Parser)]
#[command(name = "linkcollector")]
#[command(about = "LinkCollector - Save and share your links")]
#[command(version)]
struct Cli {
    /// Path to a config file (defaults to ~/.config/linkcollector/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Start with an empty store
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if cli.no_seed {
        config.seed_demo = false;
    }

    init_logging(&config.log_level);

    let store = Arc::new(Store::from_config(&config));
    if config.seed_demo {
        seed_demo_data(&store).context("Failed to seed demo data")?;
    }
    let repo: Arc<dyn Repository> = store;

    let state = AppState::from_config(&config, repo)?;
    let app = create_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running at http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

/// Initialize stderr logging
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "linkcollector={lvl},linkcollector_core={lvl},linkcollector_web={lvl},tower_http={lvl}",
            lvl = log_level
        ))
    });

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
