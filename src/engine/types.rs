//! Engine types

/// Statistics from one export run
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    /// Distinct spaces fetched (after dedup)
    pub spaces_fetched: usize,
    /// Pages fetched across both collections
    pub pages_fetched: usize,
    /// Bookmark files written (JSON and Markdown each)
    pub bookmarks_exported: usize,
    /// Annotations collected across the whole run
    pub annotations_collected: usize,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

impl SyncStats {
    /// Create empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a fetched page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }
}

impl std::fmt::Display for SyncStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} spaces, {} bookmarks, {} annotations in {} pages ({} ms)",
            self.spaces_fetched,
            self.bookmarks_exported,
            self.annotations_collected,
            self.pages_fetched,
            self.duration_ms
        )
    }
}
