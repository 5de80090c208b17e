//! Per-bookmark JSON records

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::types::{ContentListPage, ContentLocator, ContentMetadata, PersonalSpace, SpaceEntry};

use super::yyyy_mm;

/// A space entry joined with its resolved space
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnrichedSpaceEntry<'a> {
    #[serde(flatten)]
    entry: &'a SpaceEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    personal_space: Option<&'a PersonalSpace>,
}

/// Payload of one `<contentId>.json` file
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentRecord<'a> {
    content: &'a ContentLocator,
    metadata: Vec<&'a ContentMetadata>,
    space_entries: Vec<EnrichedSpaceEntry<'a>>,
}

/// Writes one JSON file per content locator, grouped into `YYYY-MM`
/// folders by creation date
#[derive(Debug, Clone)]
pub struct JsonExporter {
    dir: PathBuf,
}

impl JsonExporter {
    /// Create an exporter rooted at the given directory
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Write the locators of one page; returns the number of files written
    pub fn write_page(
        &self,
        page: &ContentListPage,
        spaces: &[PersonalSpace],
    ) -> Result<usize> {
        for locator in &page.locators {
            let content_id = &locator.personal_content_id;

            let metadata = page.metadata_for(content_id);
            let space_entries: Vec<EnrichedSpaceEntry<'_>> = page
                .entries_for(content_id)
                .into_iter()
                .map(|entry| EnrichedSpaceEntry {
                    entry,
                    personal_space: spaces
                        .iter()
                        .find(|s| s.personal_space_id == entry.personal_space_id),
                })
                .collect();

            debug!(
                "entry {} with {} spaces and {} metadata values",
                locator.location,
                space_entries.len(),
                metadata.len()
            );

            let record = ContentRecord {
                content: locator,
                metadata,
                space_entries,
            };

            let folder = self.dir.join(yyyy_mm(locator.created_when));
            fs::create_dir_all(&folder)?;
            let path = folder.join(format!("{content_id}.json"));
            fs::write(&path, serde_json::to_string_pretty(&record)?)?;
        }

        Ok(page.locators.len())
    }
}
