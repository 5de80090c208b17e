//! Wire types for the Memex personal API
//!
//! Field names follow the API's camelCase JSON. Enumerated wire values
//! (`locationType`, `format`, record `type` tags) stay as plain strings:
//! the exporter mirrors whatever the API returns and must not reject
//! values it has never seen.

use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch, as used by every API timestamp and
/// by the pagination cursor.
pub type Timestamp = i64;

/// A user-defined collection grouping bookmarked items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalSpace {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub personal_space_id: String,
    pub title: String,
    pub created_when: Timestamp,
    pub updated_when: Timestamp,
}

/// A record identifying where a bookmarked item's content lives
/// (local file, remote URL, cloud copy). One per bookmarked item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentLocator {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub personal_content_id: String,
    pub location_type: String,
    pub location_scheme: String,
    pub format: String,
    pub location: String,
    pub original_location: String,
    pub created_when: Timestamp,
    pub updated_when: Timestamp,
}

/// Title/canonical-URL metadata for a content item. The API may return
/// several entries per content id; consumers take the first or keep all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub personal_content_id: String,
    pub canonical_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub created_when: Timestamp,
    pub updated_when: Timestamp,
}

/// Membership relation linking a content item to a space, many-to-many
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceEntry {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub personal_content_id: String,
    pub personal_space_id: String,
    pub created_when: Timestamp,
    pub updated_when: Timestamp,
}

/// A highlight and/or comment attached to a content item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub created_when: Timestamp,
    pub updated_when: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<RichText>,
}

/// Rich text payload of an annotation comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    pub value: String,
}

/// Response of `GET /api/personal/space/list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceListPage {
    #[serde(default)]
    pub personal_spaces: Vec<PersonalSpace>,
}

/// Response of `GET /api/personal/content/list`
///
/// Also used as the run-wide accumulator: pages are appended onto one
/// instance so the end-of-run exports (spaces, annotations) see the
/// whole sync.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentListPage {
    #[serde(default)]
    pub metadata: Vec<ContentMetadata>,
    #[serde(default)]
    pub locators: Vec<ContentLocator>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub personal_space_entries: Vec<SpaceEntry>,
}

impl ContentListPage {
    /// Append another page's collections onto this one
    pub fn extend(&mut self, page: &ContentListPage) {
        self.metadata.extend_from_slice(&page.metadata);
        self.locators.extend_from_slice(&page.locators);
        self.annotations.extend_from_slice(&page.annotations);
        self.personal_space_entries
            .extend_from_slice(&page.personal_space_entries);
    }

    /// Metadata entries for a content id, in page order
    pub fn metadata_for(&self, content_id: &str) -> Vec<&ContentMetadata> {
        self.metadata
            .iter()
            .filter(|m| m.personal_content_id == content_id)
            .collect()
    }

    /// First metadata entry for a content id, if any
    pub fn first_metadata_for(&self, content_id: &str) -> Option<&ContentMetadata> {
        self.metadata
            .iter()
            .find(|m| m.personal_content_id == content_id)
    }

    /// Space entries for a content id, in page order
    pub fn entries_for(&self, content_id: &str) -> Vec<&SpaceEntry> {
        self.personal_space_entries
            .iter()
            .filter(|e| e.personal_content_id == content_id)
            .collect()
    }

    /// Locator for a content id, if any
    pub fn locator_for(&self, content_id: &str) -> Option<&ContentLocator> {
        self.locators
            .iter()
            .find(|l| l.personal_content_id == content_id)
    }
}
