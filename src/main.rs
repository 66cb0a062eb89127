//! vibequote — motivational quote API server.
//!
//! Serves a random quote from a Supabase-backed table through a 5-minute
//! in-memory cache, falling back to a built-in list whenever the store is
//! unconfigured, unreachable, or empty.

mod api;
mod cache;
mod config;
mod error;
mod quotes;
mod store;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::api::server::{start_server, AppState};
use crate::config::ServerConfig;
use crate::store::{QuoteStore, StoreConfig, SupabaseStore};

/// Command-line options. Environment variables provide the defaults.
#[derive(Parser, Debug)]
#[command(name = "vibequote", version, about = "Motivational quote API server")]
struct Cli {
    /// Bind address (overrides BIND)
    #[arg(long)]
    bind: Option<String>,

    /// Port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Serve frontend assets from this directory
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut server = ServerConfig::from_env();
    if let Some(bind) = cli.bind {
        server.bind = bind;
    }
    if let Some(port) = cli.port {
        server.port = port;
    }

    let store_config = StoreConfig::from_env();
    if store_config.is_none() {
        warn!("SUPABASE_URL / SUPABASE_API_KEY not set, serving fallback quotes only");
    }
    let store = SupabaseStore::new(store_config);
    let store_configured = store.is_configured();
    let store: Arc<dyn QuoteStore> = Arc::new(store);

    let state = AppState::new(store, store_configured);
    start_server(&server, state, cli.static_dir)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
