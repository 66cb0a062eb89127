//! Quote routes: random read, full list, and create.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use crate::api::server::AppState;
use crate::error::StoreError;
use crate::quotes::{pick_random, Quote};

/// Request body for `POST /api/quote`.
#[derive(Debug, Deserialize)]
pub struct CreateQuote {
    pub text: String,
    pub author: String,
}

/// GET /api/quote — one random quote.
///
/// Never returns an error status: when the store is unavailable the cache
/// serves its built-in fallback list, so there is always something to pick.
pub async fn get_quote(State(state): State<Arc<AppState>>) -> Json<Value> {
    let quotes = state.cache.get_quotes().await;
    let picked = pick_random(&quotes);
    Json(json!({
        "quote": picked.text,
        "author": picked.author,
    }))
}

/// GET /api/quotes — the full current list (cached, fresh, or fallback).
pub async fn list_quotes(State(state): State<Arc<AppState>>) -> Json<Vec<Quote>> {
    Json(state.cache.get_quotes().await)
}

/// POST /api/quote — insert a quote into the store.
///
/// Writes have no fallback: an unconfigured or failing store surfaces as 500.
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateQuote>,
) -> (StatusCode, Json<Value>) {
    match state.store.insert_one(&body.text, &body.author).await {
        Ok(quote) => (StatusCode::OK, Json(json!(quote))),
        Err(StoreError::Unconfigured) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Supabase not configured" })),
        ),
        Err(e) => {
            error!("quote insert failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to create quote" })),
            )
        }
    }
}
