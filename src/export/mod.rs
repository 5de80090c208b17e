//! File exporters
//!
//! Rendering functions that take a fetched content page plus the full
//! space list and mirror them to disk. No business logic beyond
//! content-id joins; rendering is separate from file I/O so tests can
//! assert on strings.
//!
//! Output is overwritten per content id (never appended), which is what
//! makes re-running with an older cursor idempotent.

mod filename;
mod json;
mod markdown;

pub use filename::{entry_filename, sanitize_title};
pub use json::JsonExporter;
pub use markdown::MarkdownExporter;

use chrono::{DateTime, SecondsFormat};

use crate::types::Timestamp;

fn utc(ts: Timestamp) -> DateTime<chrono::Utc> {
    DateTime::from_timestamp_millis(ts).unwrap_or(DateTime::UNIX_EPOCH)
}

/// `YYYY-MM` folder name for a timestamp (UTC)
pub(crate) fn yyyy_mm(ts: Timestamp) -> String {
    utc(ts).format("%Y-%m").to_string()
}

/// `YYYY-MM-DD` wiki date for a timestamp (UTC)
pub(crate) fn yyyy_mm_dd(ts: Timestamp) -> String {
    utc(ts).format("%Y-%m-%d").to_string()
}

/// ISO-8601 render with millisecond precision, e.g. `2024-01-02T03:04:05.678Z`
pub(crate) fn iso_utc(ts: Timestamp) -> String {
    utc(ts).to_rfc3339_opts(SecondsFormat::Millis, true)
}
