//! File-based state store

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Timestamp;

/// On-disk shape of `state.json`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    last_fetched_date: Timestamp,
}

/// Loads and saves the last-fetched cursor
///
/// `load` never fails: a missing or corrupt file means "no prior state"
/// and the run starts from its default cursor. `save` failures surface as
/// errors for the caller to log and ignore: output writes are idempotent
/// per content id, so the worst case is re-fetching a few pages next run.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store backed by the given file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the persisted cursor, if any
    pub fn load(&self) -> Option<Timestamp> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("no resume state at {}: {e}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str::<PersistedState>(&contents) {
            Ok(state) => Some(state.last_fetched_date),
            Err(e) => {
                debug!("ignoring unparseable resume state at {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Persist the cursor, atomically (temp file + rename)
    pub fn save(&self, cursor: Timestamp) -> Result<()> {
        let state = PersistedState {
            last_fetched_date: cursor,
        };
        let contents = serde_json::to_string_pretty(&state)
            .map_err(|e| Error::state(format!("failed to serialize state: {e}")))?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &contents)
            .map_err(|e| Error::state(format!("failed to write state file: {e}")))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::state(format!("failed to rename state file: {e}")))?;

        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
