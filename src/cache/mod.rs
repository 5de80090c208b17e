//! Response caching
//!
//! GET responses memoized across runs so reruns during development skip
//! the network. Purely an optimization: the sync is correct with caching
//! disabled, and cache write failures never fail a request.
//!
//! The store is a URL-keyed string map behind [`ResponseCache`], so disk,
//! memory, and no-op backends swap without touching the HTTP client.

mod disk;
mod key;

use url::Url;

use crate::error::Result;

pub use disk::DiskCache;
pub use key::cache_rel_path;

/// URL-keyed store of response bodies
pub trait ResponseCache: Send + Sync {
    /// Body cached for this URL, if any
    fn get(&self, url: &Url) -> Option<String>;

    /// Persist the body for this URL
    fn put(&self, url: &Url, body: &str) -> Result<()>;
}

/// Cache that never hits and never stores
#[derive(Debug, Default)]
pub struct NoopCache;

impl ResponseCache for NoopCache {
    fn get(&self, _url: &Url) -> Option<String> {
        None
    }

    fn put(&self, _url: &Url, _body: &str) -> Result<()> {
        Ok(())
    }
}

/// In-process cache, for tests
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl MemoryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, url: &Url) -> Option<String> {
        self.entries.lock().unwrap().get(url.as_str()).cloned()
    }

    fn put(&self, url: &Url, body: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(url.as_str().to_string(), body.to_string());
        Ok(())
    }
}
