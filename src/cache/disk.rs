//! On-disk response cache

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::Result;

use super::key::cache_rel_path;
use super::ResponseCache;

/// Cache persisting one file per URL under a root directory
#[derive(Debug, Clone)]
pub struct DiskCache {
    root: PathBuf,
}

impl DiskCache {
    /// Create a cache rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Absolute path of the entry for a URL
    pub fn entry_path(&self, url: &Url) -> PathBuf {
        self.root.join(cache_rel_path(url))
    }
}

impl ResponseCache for DiskCache {
    fn get(&self, url: &Url) -> Option<String> {
        fs::read_to_string(self.entry_path(url)).ok()
    }

    fn put(&self, url: &Url, body: &str) -> Result<()> {
        let path = self.entry_path(url);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, body)?;
        Ok(())
    }
}
