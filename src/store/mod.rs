//! Remote quote store gateway.

pub mod supabase;

pub use supabase::{StoreConfig, SupabaseStore};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::quotes::Quote;

/// Read/write access to the backing quotes table.
///
/// Reads report unavailability as a normal `Err` value so callers can degrade
/// to the fallback list; writes have no fallback and propagate their failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Fetch every row of the quotes table.
    ///
    /// A successful result is always non-empty: a reachable-but-empty table
    /// is reported as [`StoreError::Empty`].
    async fn fetch_all(&self) -> Result<Vec<Quote>, StoreError>;

    /// Insert one quote and return the stored row.
    async fn insert_one(&self, text: &str, author: &str) -> Result<Quote, StoreError>;
}
