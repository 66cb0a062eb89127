//! Single-slot quote cache over the store's read path.
//!
//! The slot holds the full row set from the last successful fetch and is only
//! ever replaced wholesale, never merged. A slot older than the TTL triggers a
//! refetch; when that fails or the table is empty the built-in fallback list
//! is served and the slot is left untouched. An expired slot is NOT re-served
//! after a failed refresh — staleness past the TTL falls all the way back to
//! the hardcoded list.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::quotes::{fallback_quotes, Quote};
use crate::store::QuoteStore;

/// How long a cached row set stays valid: 5 minutes.
pub const DEFAULT_TTL_SECS: u64 = 5 * 60;

/// One complete snapshot of the quotes table.
#[derive(Debug, Clone)]
struct CacheEntry {
    quotes: Vec<Quote>,
    fetched_at: u64,
}

/// TTL cache wrapping a [`QuoteStore`]'s read operation.
///
/// The lock is not held across the remote fetch, so two requests racing past
/// an expired slot may both hit the store; the last snapshot written wins.
pub struct QuoteCache {
    store: Arc<dyn QuoteStore>,
    slot: RwLock<Option<CacheEntry>>,
    ttl_secs: u64,
    now_fn: fn() -> u64,
}

impl QuoteCache {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self::with_ttl(store, DEFAULT_TTL_SECS)
    }

    pub fn with_ttl(store: Arc<dyn QuoteStore>, ttl_secs: u64) -> Self {
        Self {
            store,
            slot: RwLock::new(None),
            ttl_secs,
            now_fn: now_secs,
        }
    }

    /// Return the current quote list. Never fails.
    ///
    /// Fresh slot → cached list, zero external calls. Expired or empty slot →
    /// one store fetch; on success the slot is replaced, on any failure the
    /// fallback list is returned instead.
    pub async fn get_quotes(&self) -> Vec<Quote> {
        let now = (self.now_fn)();

        if let Some(entry) = self.slot.read().await.as_ref() {
            if now.saturating_sub(entry.fetched_at) < self.ttl_secs {
                debug!(count = entry.quotes.len(), "serving cached quotes");
                return entry.quotes.clone();
            }
        }

        match self.store.fetch_all().await {
            Ok(rows) => {
                debug!(count = rows.len(), "caching fresh quotes from store");
                let mut slot = self.slot.write().await;
                *slot = Some(CacheEntry {
                    quotes: rows.clone(),
                    fetched_at: now,
                });
                rows
            }
            // Reachable-but-empty is reported separately from transport
            // failures; both serve the fallback list.
            Err(StoreError::Empty) => {
                debug!("store has no rows, serving fallback quotes");
                fallback_quotes()
            }
            Err(e) => {
                warn!("store fetch failed, serving fallback quotes: {e}");
                fallback_quotes()
            }
        }
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
