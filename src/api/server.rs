//! Axum API server for vibequote.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::cache::QuoteCache;
use crate::config::ServerConfig;
use crate::store::QuoteStore;

/// Shared state for all API handlers.
#[derive(Clone)]
pub struct AppState {
    /// TTL cache over the store's read path.
    pub cache: Arc<QuoteCache>,
    /// Direct store handle for the write path (writes bypass the cache).
    pub store: Arc<dyn QuoteStore>,
    /// Whether store credentials were present at startup.
    pub store_configured: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn QuoteStore>, store_configured: bool) -> Self {
        Self {
            cache: Arc::new(QuoteCache::new(store.clone())),
            store,
            store_configured,
        }
    }
}

/// Build the axum router with all API routes.
pub fn build_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    // Wrap state in Arc once so it is shared across all handlers.
    let shared_state = Arc::new(state);

    // CORS: the frontend may be served from anywhere, mirror its permissive
    // `*` policy. Preflight OPTIONS is answered by the layer.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([HeaderName::from_static("content-type")]);

    let api = Router::new()
        // Health
        .route("/api/health", get(super::routes::health::get_health))
        // Quotes
        .route(
            "/api/quote",
            get(super::routes::quotes::get_quote).post(super::routes::quotes::create_quote),
        )
        .route("/api/quotes", get(super::routes::quotes::list_quotes))
        // Body size limit: 64 KiB, a quote is tiny.
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(shared_state);

    if let Some(dir) = static_dir {
        api.fallback_service(tower_http::services::ServeDir::new(dir))
    } else {
        api
    }
}

/// Start the API server.
pub async fn start_server(
    config: &ServerConfig,
    state: AppState,
    static_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = build_router(state, static_dir);
    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("quote API server listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
