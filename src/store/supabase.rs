//! Supabase REST gateway for the quotes table.
//!
//! Talks to PostgREST at `{base_url}/rest/v1/quotes`, sending the project API
//! key as both the `apikey` and `Authorization: Bearer` headers. No retries;
//! a failed call is retried naturally when the cache TTL next expires.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::QuoteStore;
use crate::error::StoreError;
use crate::quotes::Quote;

/// Request timeout for store calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the Supabase project.
#[derive(Clone)]
pub struct StoreConfig {
    /// Project base URL, without a trailing slash.
    pub base_url: String,
    /// Service API key, used for both auth headers.
    pub api_key: String,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl StoreConfig {
    /// Read `SUPABASE_URL` and `SUPABASE_API_KEY` from the environment.
    ///
    /// Returns `None` when either is unset or empty; the server then runs in
    /// fallback-only mode (reads degrade, writes fail).
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("SUPABASE_URL").ok().filter(|v| !v.is_empty())?;
        let api_key = std::env::var("SUPABASE_API_KEY").ok().filter(|v| !v.is_empty())?;
        Some(Self::new(&base_url, &api_key))
    }

    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

/// Gateway that speaks the Supabase PostgREST API.
///
/// Holds `Option<StoreConfig>` so an unconfigured deployment still constructs;
/// every call on it then returns [`StoreError::Unconfigured`].
pub struct SupabaseStore {
    config: Option<StoreConfig>,
    client: Client,
}

impl std::fmt::Debug for SupabaseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseStore")
            .field("config", &self.config)
            .finish()
    }
}

impl SupabaseStore {
    pub fn new(config: Option<StoreConfig>) -> Self {
        Self {
            config,
            client: Self::build_client(),
        }
    }

    /// Whether store credentials are present.
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    fn build_client() -> Client {
        Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client")
    }

    /// Base URL of the quotes table.
    fn table_url(config: &StoreConfig) -> String {
        format!("{}/rest/v1/quotes", config.base_url)
    }

    /// Attach authentication to the request builder.
    fn apply_auth(config: &StoreConfig, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &config.api_key)
            .header("Authorization", format!("Bearer {}", config.api_key))
    }
}

#[async_trait]
impl QuoteStore for SupabaseStore {
    async fn fetch_all(&self) -> Result<Vec<Quote>, StoreError> {
        let Some(config) = &self.config else {
            return Err(StoreError::Unconfigured);
        };

        debug!("fetching quotes from store");
        let request = self.client.get(format!("{}?select=*", Self::table_url(config)));
        let response = Self::apply_auth(config, request).send().await?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }

        let rows: Vec<Quote> = response.json().await?;
        if rows.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(rows)
    }

    async fn insert_one(&self, text: &str, author: &str) -> Result<Quote, StoreError> {
        let Some(config) = &self.config else {
            return Err(StoreError::Unconfigured);
        };

        debug!("inserting quote into store");
        let body = serde_json::json!({ "text": text, "author": author });
        let request = self
            .client
            .post(Self::table_url(config))
            // PostgREST omits the created row from the response without this.
            .header("Prefer", "return=representation")
            .json(&body);
        let response = Self::apply_auth(config, request).send().await?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }

        // The created rows come back as an array.
        let mut rows: Vec<Quote> = response.json().await?;
        rows.pop().ok_or(StoreError::Empty)
    }
}
