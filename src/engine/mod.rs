//! Sync engine
//!
//! Owns the run's control flow: paginate spaces into memory, then walk
//! content pages from the resume cursor, exporting each page and
//! checkpointing state, until the API returns an empty page.
//!
//! Error policy differs by phase on purpose. A failed spaces request
//! aborts the run (exports would be missing their join targets); a failed
//! content request is logged and treated as end-of-data, so a flaky tail
//! page finalizes the run with everything collected so far.

mod types;

pub use types::SyncStats;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};

use crate::cache::{DiskCache, NoopCache, ResponseCache};
use crate::config::Config;
use crate::error::Result;
use crate::export::{JsonExporter, MarkdownExporter};
use crate::http::{ApiClient, ApiClientConfig};
use crate::pagination::{now_ms, CursorTracker};
use crate::state::StateStore;
use crate::types::{ContentListPage, PersonalSpace, SpaceListPage, Timestamp};

/// Header carrying the personal key id
pub const HEADER_KEY_ID: &str = "X-Memex-Personal-Key-ID";
/// Header carrying the personal key secret
pub const HEADER_KEY_SECRET: &str = "X-Memex-Personal-Key-Secret";

/// Orchestrates one export run
pub struct SyncEngine {
    client: ApiClient,
    state: StateStore,
    json: JsonExporter,
    markdown: MarkdownExporter,
    config: Config,
    stats: SyncStats,
}

impl SyncEngine {
    /// Create an engine; the response cache follows `config.cache_dir`
    pub fn new(config: Config) -> Self {
        let cache: Arc<dyn ResponseCache> = match &config.cache_dir {
            Some(dir) => Arc::new(DiskCache::new(dir)),
            None => Arc::new(NoopCache),
        };
        Self::with_cache(config, cache)
    }

    /// Create an engine with an explicit cache backend
    pub fn with_cache(config: Config, cache: Arc<dyn ResponseCache>) -> Self {
        let client_config = ApiClientConfig::new(&config.api_base)
            .timeout(config.timeout)
            .header(HEADER_KEY_ID, &config.key_id)
            .header(HEADER_KEY_SECRET, &config.key_secret);

        Self {
            client: ApiClient::with_cache(client_config, cache),
            state: StateStore::new(&config.state_path),
            json: JsonExporter::new(&config.json_dir),
            markdown: MarkdownExporter::new(&config.markdown_dir),
            config,
            stats: SyncStats::new(),
        }
    }

    /// Statistics collected so far
    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Run the full export
    pub async fn run(&mut self) -> Result<SyncStats> {
        let started = Instant::now();

        let spaces = self.fetch_all_spaces().await?;

        let start_cursor = self
            .state
            .load()
            .or(self.config.start_cursor)
            .unwrap_or_else(now_ms);
        let mut tracker = CursorTracker::new("content", start_cursor);
        let mut collected = ContentListPage::default();

        loop {
            let Some(page) = self.fetch_content_page(tracker.cursor()).await else {
                break;
            };
            if page.metadata.is_empty() {
                break;
            }
            info!("fetched {} metadata values", page.metadata.len());

            collected.extend(&page);
            self.stats.bookmarks_exported += self.json.write_page(&page, &spaces)?;
            self.markdown.write_page(&page, &spaces)?;

            let Some(terminal) = page.metadata.last().map(|m| m.updated_when) else {
                break;
            };
            if let Err(e) = tracker.advance(terminal) {
                error!("content page ended on cursor {terminal} twice; aborting to avoid an endless loop");
                return Err(e);
            }
            info!("fetched data until {terminal}");

            if let Err(e) = self.state.save(terminal) {
                warn!("failed to persist resume state: {e}");
            }
        }

        self.markdown.write_annotations(&collected.annotations)?;
        self.markdown.write_spaces(&spaces, &collected)?;

        self.stats.annotations_collected = collected.annotations.len();
        self.stats.duration_ms = started.elapsed().as_millis() as u64;
        info!("export finished: {}", self.stats);
        Ok(self.stats.clone())
    }

    /// Fetch every personal space, deduplicated by id
    ///
    /// Always starts from the configured cursor (or now), never from the
    /// resume state: the full space list is needed in memory to resolve
    /// joins for whatever content pages follow.
    pub async fn fetch_all_spaces(&mut self) -> Result<Vec<PersonalSpace>> {
        let start = self.config.start_cursor.unwrap_or_else(now_ms);
        let mut tracker = CursorTracker::new("spaces", start);
        let mut spaces: Vec<PersonalSpace> = Vec::new();

        loop {
            let path = format!(
                "/api/personal/space/list?spacesToWhen={}&maxSpaceCount={}",
                tracker.cursor(),
                self.config.page_size
            );
            info!("requesting {}{path}", self.config.api_base);

            let page: SpaceListPage = self.client.get_json(&path).await?;
            self.stats.add_page();
            if page.personal_spaces.is_empty() {
                break;
            }
            info!("fetched {} spaces", page.personal_spaces.len());

            let Some(terminal) = page.personal_spaces.last().map(|s| s.created_when) else {
                break;
            };
            spaces.extend(page.personal_spaces);

            if let Err(e) = tracker.advance(terminal) {
                error!("space page ended on cursor {terminal} twice; aborting to avoid an endless loop");
                return Err(e);
            }
            info!("next space page before {terminal}");
        }

        let spaces = dedup_by_id(spaces);
        info!("fetched all {} spaces", spaces.len());
        self.stats.spaces_fetched = spaces.len();
        Ok(spaces)
    }

    /// Fetch one content page; any failure ends pagination silently
    async fn fetch_content_page(&mut self, cursor: Timestamp) -> Option<ContentListPage> {
        let path = format!(
            "/api/personal/content/list?contentToWhen={cursor}&maxContentCount={}\
             &withMetadata=true&withAnnotations=true&withLocators=true&withPersonalSpaceIds=true",
            self.config.page_size
        );
        info!("requesting {}{path}", self.config.api_base);

        match self.client.get_json::<ContentListPage>(&path).await {
            Ok(page) => {
                self.stats.add_page();
                Some(page)
            }
            Err(e) => {
                warn!("error fetching content page: {e}; treating as end of data");
                None
            }
        }
    }
}

/// Keep the first occurrence of each space id, preserving order
fn dedup_by_id(spaces: Vec<PersonalSpace>) -> Vec<PersonalSpace> {
    let mut seen = HashSet::new();
    spaces
        .into_iter()
        .filter(|space| seen.insert(space.personal_space_id.clone()))
        .collect()
}
