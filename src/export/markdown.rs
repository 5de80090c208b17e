//! Cross-linked Markdown notes
//!
//! One note per bookmark and one per space, joined through `[[wiki]]`
//! links and relative paths. Front matter is templated by hand: it
//! carries wiki date links and quoted link lists that no YAML serializer
//! emits.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{Annotation, ContentListPage, ContentLocator, ContentMetadata, PersonalSpace};

use super::filename::{entry_filename, sanitize_title};
use super::{iso_utc, yyyy_mm, yyyy_mm_dd};

/// A bookmark as it appears inside a space note
#[derive(Debug, Clone)]
pub(crate) struct SpaceBookmark {
    /// File stem of the bookmark note, also its wiki-link label
    pub label: String,
    /// The bookmark's original URL
    pub url: String,
}

/// Writes bookmark notes, space notes, and the annotations file
#[derive(Debug, Clone)]
pub struct MarkdownExporter {
    dir: PathBuf,
}

impl MarkdownExporter {
    /// Create an exporter rooted at the given directory
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Write one note per locator in the page; returns the number written
    pub fn write_page(
        &self,
        page: &ContentListPage,
        spaces: &[PersonalSpace],
    ) -> Result<usize> {
        for locator in &page.locators {
            let content_id = &locator.personal_content_id;
            let metadata = page.first_metadata_for(content_id);

            // entries pointing at spaces we never fetched are dropped
            let space_names: Vec<&str> = page
                .entries_for(content_id)
                .into_iter()
                .filter_map(|entry| {
                    spaces
                        .iter()
                        .find(|s| s.personal_space_id == entry.personal_space_id)
                        .map(|s| s.title.as_str())
                })
                .collect();

            let stem = entry_filename(
                metadata.and_then(|m| m.title.as_deref()),
                Some(&locator.location),
                content_id,
            );

            let folder = self.dir.join(yyyy_mm(locator.created_when));
            fs::create_dir_all(&folder)?;
            fs::write(
                folder.join(format!("{stem}.md")),
                render_bookmark(locator, metadata, &space_names),
            )?;
        }

        Ok(page.locators.len())
    }

    /// Write one note per space under `spaces/`; returns the number written
    pub fn write_spaces(
        &self,
        spaces: &[PersonalSpace],
        all: &ContentListPage,
    ) -> Result<usize> {
        let spaces_dir = self.dir.join("spaces");
        fs::create_dir_all(&spaces_dir)?;

        for space in spaces {
            let bookmarks: Vec<SpaceBookmark> = all
                .personal_space_entries
                .iter()
                .filter(|entry| entry.personal_space_id == space.personal_space_id)
                .filter_map(|entry| {
                    let locator = all.locator_for(&entry.personal_content_id)?;
                    let metadata = all.first_metadata_for(&entry.personal_content_id);
                    Some(SpaceBookmark {
                        label: entry_filename(
                            metadata.and_then(|m| m.title.as_deref()),
                            Some(&locator.location),
                            &entry.personal_content_id,
                        ),
                        url: locator.original_location.clone(),
                    })
                })
                .collect();

            let stem = match sanitize_title(&space.title) {
                s if s.is_empty() => space.personal_space_id.clone(),
                s => s,
            };
            fs::write(
                spaces_dir.join(format!("{stem}.md")),
                render_space(space, &bookmarks),
            )?;
        }

        Ok(spaces.len())
    }

    /// Write every annotation collected across the run to `annotations.json`
    pub fn write_annotations(&self, annotations: &[Annotation]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(
            self.dir.join("annotations.json"),
            serde_json::to_string_pretty(annotations)?,
        )?;
        Ok(())
    }
}

/// Render a bookmark note
pub(crate) fn render_bookmark(
    locator: &ContentLocator,
    metadata: Option<&ContentMetadata>,
    space_names: &[&str],
) -> String {
    let title = metadata
        .and_then(|m| m.title.as_deref())
        .unwrap_or(&locator.personal_content_id)
        .replace('\n', " ");

    let mut out = String::new();
    out.push_str("---\n");
    let _ = writeln!(out, "Title: {title}");
    let _ = writeln!(out, "Url: {}", locator.original_location);
    let _ = writeln!(out, "Created at: [[{}]]", yyyy_mm_dd(locator.created_when));
    let _ = writeln!(out, "Updated at: [[{}]]", yyyy_mm_dd(locator.updated_when));
    let _ = writeln!(out, "Type: {}", locator.location_type);
    let _ = writeln!(out, "Format: {}", locator.format);
    let _ = writeln!(out, "Memex Personal Content ID: {}", locator.personal_content_id);
    if let Some(metadata) = metadata {
        if !metadata.canonical_url.is_empty() {
            let _ = writeln!(out, "Canonical Url: {}", metadata.canonical_url);
        }
    }
    if !space_names.is_empty() {
        out.push_str("Spaces:\n");
        for name in space_names {
            let _ = writeln!(out, "- \"[[{name}]]\"");
        }
    }
    out.push_str("---\n\n");

    out.push_str("## Details\n");
    let _ = writeln!(out, "Created at: {}", iso_utc(locator.created_when));
    let _ = writeln!(out, "Updated at: {}", iso_utc(locator.updated_when));
    out.push('\n');

    if !space_names.is_empty() {
        out.push_str("## Spaces\n");
        for name in space_names {
            let _ = writeln!(out, "- [{name}](../spaces/{}.md)", sanitize_title(name));
        }
    }

    out
}

/// Render a space note
pub(crate) fn render_space(space: &PersonalSpace, bookmarks: &[SpaceBookmark]) -> String {
    let mut out = String::new();
    out.push_str("---\n");
    let _ = writeln!(out, "Title: {}", space.title);
    let _ = writeln!(out, "Memex Space ID: {}", space.personal_space_id);
    let _ = writeln!(out, "Type: {}", space.kind);
    let _ = writeln!(out, "Created at: [[{}]]", yyyy_mm_dd(space.created_when));
    let _ = writeln!(out, "Updated at: [[{}]]", yyyy_mm_dd(space.updated_when));
    if !bookmarks.is_empty() {
        out.push_str("Links:\n");
        for bookmark in bookmarks {
            let _ = writeln!(out, "- \"[[{}]]\"", bookmark.label);
        }
    }
    out.push_str("---\n\n");

    out.push_str("## Details\n");
    let _ = writeln!(out, "Created: {}", iso_utc(space.created_when));
    let _ = writeln!(out, "Updated: {}", iso_utc(space.updated_when));
    out.push('\n');

    if !bookmarks.is_empty() {
        out.push_str("## Links\n");
        for bookmark in bookmarks {
            let _ = writeln!(out, "- [{}]({})", bookmark.label, bookmark.url);
        }
    }

    out
}
