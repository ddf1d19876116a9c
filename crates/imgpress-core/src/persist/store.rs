use tracing::{debug, warn};

use crate::consts::{RESULT_KEY, SELECTED_KEY};
use crate::error::StorageError;
use crate::result::CompressionResult;

use super::storage::SessionStorage;

/// A result and its selected level as read back from storage.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub result: CompressionResult,
    /// Always a valid index into `result`.
    pub selected: usize,
}

/// Durable mirror of the browsing state.
///
/// Holds one result under [`RESULT_KEY`] and its selected level under
/// [`SELECTED_KEY`]. Reads never fail: anything unreadable is wiped and
/// reported as absent.
pub struct SessionStore<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Write the result and selection. A failure on either write removes
    /// both entries (best effort) so no half-written pair is left behind.
    pub fn save(&mut self, result: &CompressionResult, selected: usize) -> Result<(), StorageError> {
        let json = serde_json::to_string(result)
            .map_err(|e| StorageError::Unavailable(format!("cannot serialize result: {e}")))?;

        let written = self
            .storage
            .set(RESULT_KEY, &json)
            .and_then(|()| self.storage.set(SELECTED_KEY, &selected.to_string()));

        if let Err(e) = written {
            warn!(error = %e, "Failed to save session state");
            self.clear();
            return Err(e);
        }
        Ok(())
    }

    /// Rewrite only the selected level.
    pub fn save_selection(&mut self, selected: usize) -> Result<(), StorageError> {
        self.storage
            .set(SELECTED_KEY, &selected.to_string())
            .inspect_err(|e| warn!(error = %e, "Failed to update selected level"))
    }

    /// Read back the persisted state, or `None` when there is none or it is
    /// corrupt. Corrupt state is cleared as a side effect.
    pub fn load(&mut self) -> Option<SessionSnapshot> {
        let raw = match self.storage.get(RESULT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read session state, clearing");
                self.clear();
                return None;
            }
        };

        let result: CompressionResult = match serde_json::from_str(&raw) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Discarding corrupt session state");
                self.clear();
                return None;
            }
        };

        let selected = self.load_selection(&result);
        Some(SessionSnapshot { result, selected })
    }

    /// Stored index if present and valid, otherwise the last level.
    fn load_selection(&self, result: &CompressionResult) -> usize {
        let fallback = result.last_index();
        let stored = match self.storage.get(SELECTED_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return fallback,
            Err(e) => {
                warn!(error = %e, "Failed to read selected level, using last");
                return fallback;
            }
        };

        match stored.trim().parse::<usize>() {
            Ok(index) if index < result.len() => index,
            _ => {
                debug!(stored = %stored, fallback, "Invalid stored selection, using last");
                fallback
            }
        }
    }

    /// Remove both entries. Idempotent; failures are logged only.
    pub fn clear(&mut self) {
        for key in [RESULT_KEY, SELECTED_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "Failed to clear session entry");
            }
        }
    }
}
