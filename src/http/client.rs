//! Typed GET client with response caching

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::cache::{NoopCache, ResponseCache};
use crate::error::{Error, Result};

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL prepended to request paths
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Headers added to every request (the personal key pair)
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl ApiClientConfig {
    /// Create a config for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("memex-export/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Add a default header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// GET client for the personal API
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
    cache: Arc<dyn ResponseCache>,
}

impl ApiClient {
    /// Create a client without caching
    pub fn new(config: ApiClientConfig) -> Self {
        Self::with_cache(config, Arc::new(NoopCache))
    }

    /// Create a client backed by a response cache
    pub fn with_cache(config: ApiClientConfig, cache: Arc<dyn ResponseCache>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            config,
            cache,
        }
    }

    /// GET a path (with query string) and parse the JSON body
    ///
    /// A cached body short-circuits the network entirely. On a miss the
    /// exact body text is stored before parsing, so a later run replays
    /// the same bytes.
    pub async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = self.build_url(path_and_query)?;
        let body = self.get_body(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_body(&self, url: &Url) -> Result<String> {
        if let Some(body) = self.cache.get(url) {
            debug!("cache hit for {url}");
            return Ok(body);
        }

        let mut req = self.client.get(url.clone());
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        if let Err(e) = self.cache.put(url, &body) {
            warn!("failed to cache response for {url}: {e}");
        }
        Ok(body)
    }

    fn build_url(&self, path_and_query: &str) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path_and_query.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
