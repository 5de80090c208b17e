//! Run configuration
//!
//! Everything the engine, state store, and exporters need is carried in an
//! explicit [`Config`] built from the environment plus CLI flags, no
//! module-level globals, so tests can point a run at a mock endpoint and a
//! temp directory.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::types::Timestamp;

/// Domain the personal API lives on
pub const DEFAULT_DOMAIN: &str = "memex.social";

/// Page-size cap the API enforces on both list endpoints
pub const PAGE_SIZE: u32 = 50;

/// Environment variable holding the personal key id
pub const ENV_KEY_ID: &str = "MEMEX_KEY_ID";
/// Environment variable holding the personal key secret
pub const ENV_KEY_SECRET: &str = "MEMEX_KEY_SECRET";
/// Environment variable overriding the initial cursor (ms since epoch)
pub const ENV_START_TIMESTAMP: &str = "START_TIMESTAMP";

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API, e.g. `https://memex.social`
    pub api_base: String,
    /// Value for the `X-Memex-Personal-Key-ID` header
    pub key_id: String,
    /// Value for the `X-Memex-Personal-Key-Secret` header
    pub key_secret: String,
    /// Items requested per page
    pub page_size: u32,
    /// Initial cursor override; defaults to "now" when absent
    pub start_cursor: Option<Timestamp>,
    /// Resume state file
    pub state_path: PathBuf,
    /// Root of the per-bookmark JSON output
    pub json_dir: PathBuf,
    /// Root of the Markdown output (bookmarks, spaces, annotations.json)
    pub markdown_dir: PathBuf,
    /// Response cache root; `None` disables caching
    pub cache_dir: Option<PathBuf>,
    /// Request timeout
    pub timeout: Duration,
}

impl Config {
    /// Create a config with the given credentials and default paths
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            api_base: format!("https://{DEFAULT_DOMAIN}"),
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            page_size: PAGE_SIZE,
            start_cursor: None,
            state_path: PathBuf::from("./state.json"),
            json_dir: PathBuf::from("./json-output"),
            markdown_dir: PathBuf::from("./markdown-output"),
            cache_dir: Some(PathBuf::from("./cache")),
            timeout: Duration::from_secs(30),
        }
    }

    /// Build a config from the environment
    ///
    /// Requires `MEMEX_KEY_ID` and `MEMEX_KEY_SECRET`; honors
    /// `START_TIMESTAMP` as the initial cursor override.
    pub fn from_env() -> Result<Self> {
        let key_id = require_env(ENV_KEY_ID)?;
        let key_secret = require_env(ENV_KEY_SECRET)?;

        let mut config = Self::new(key_id, key_secret);
        if let Ok(raw) = std::env::var(ENV_START_TIMESTAMP) {
            let parsed = raw.parse::<Timestamp>().map_err(|_| {
                Error::config(format!("{ENV_START_TIMESTAMP} is not a millisecond timestamp: {raw:?}"))
            })?;
            config.start_cursor = Some(parsed);
        }
        Ok(config)
    }

    /// Override the API base URL (mock servers in tests)
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Override the initial cursor
    #[must_use]
    pub fn with_start_cursor(mut self, cursor: Timestamp) -> Self {
        self.start_cursor = Some(cursor);
        self
    }

    /// Override the state file path
    #[must_use]
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = path.into();
        self
    }

    /// Override the JSON output directory
    #[must_use]
    pub fn with_json_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_dir = path.into();
        self
    }

    /// Override the Markdown output directory
    #[must_use]
    pub fn with_markdown_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.markdown_dir = path.into();
        self
    }

    /// Set or disable the response cache directory
    #[must_use]
    pub fn with_cache_dir(mut self, path: Option<PathBuf>) -> Self {
        self.cache_dir = path;
        self
    }
}

fn require_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::missing_env(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("id", "secret");
        assert_eq!(config.api_base, "https://memex.social");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.state_path, PathBuf::from("./state.json"));
        assert_eq!(config.cache_dir, Some(PathBuf::from("./cache")));
        assert!(config.start_cursor.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::new("id", "secret")
            .with_api_base("http://127.0.0.1:9000")
            .with_start_cursor(1_700_000_000_000)
            .with_cache_dir(None);

        assert_eq!(config.api_base, "http://127.0.0.1:9000");
        assert_eq!(config.start_cursor, Some(1_700_000_000_000));
        assert!(config.cache_dir.is_none());
    }
}
