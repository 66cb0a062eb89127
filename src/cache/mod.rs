//! Quote list caching with TTL expiry and static fallback.

pub mod quote_cache;

pub use quote_cache::{QuoteCache, DEFAULT_TTL_SECS};
