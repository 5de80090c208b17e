//! Cursor tracking with a forward-progress guard

use chrono::Utc;

use crate::error::{Error, Result};
use crate::types::Timestamp;

/// Current wall-clock time in milliseconds, the default initial cursor
pub fn now_ms() -> Timestamp {
    Utc::now().timestamp_millis()
}

/// Tracks the descending timestamp cursor for one paginated collection
///
/// The collection label only shows up in logs and in the `NoProgress`
/// error, so failures name the loop they came from.
#[derive(Debug)]
pub struct CursorTracker {
    collection: &'static str,
    cursor: Timestamp,
    prev_terminal: Option<Timestamp>,
}

impl CursorTracker {
    /// Create a tracker starting at the given cursor
    pub fn new(collection: &'static str, start: Timestamp) -> Self {
        Self {
            collection,
            cursor: start,
            prev_terminal: None,
        }
    }

    /// Cursor value for the next request's `toWhen` parameter
    pub fn cursor(&self) -> Timestamp {
        self.cursor
    }

    /// Advance past a non-empty page ending on `terminal_key`
    ///
    /// Fails with [`Error::NoProgress`] when the page ends on the same key
    /// as the previous page. Not retryable: the same request would yield
    /// the same page again.
    pub fn advance(&mut self, terminal_key: Timestamp) -> Result<()> {
        if self.prev_terminal == Some(terminal_key) {
            return Err(Error::NoProgress {
                collection: self.collection,
                cursor: terminal_key,
            });
        }
        self.prev_terminal = Some(terminal_key);
        self.cursor = terminal_key;
        Ok(())
    }
}
