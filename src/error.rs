//! Error types for vibequote.

use thiserror::Error;

/// Failure modes when talking to the remote quote store.
///
/// Every variant is recoverable on the read path (the cache serves the
/// fallback list); the write path surfaces them to the caller instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `SUPABASE_URL` / `SUPABASE_API_KEY` are not set.
    #[error("Supabase not configured")]
    Unconfigured,

    /// Transport-level failure (DNS, connect, TLS, timeout, body decode).
    #[error("store request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success HTTP status.
    #[error("store returned status {0}")]
    Status(reqwest::StatusCode),

    /// The store was reachable but returned no rows.
    #[error("store returned no rows")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_display_matches_api_contract() {
        // This exact text is returned verbatim in the write endpoint's 500 body.
        assert_eq!(StoreError::Unconfigured.to_string(), "Supabase not configured");
    }

    #[test]
    fn test_status_display_includes_code() {
        let err = StoreError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(StoreError::Empty.to_string(), "store returned no rows");
    }
}
