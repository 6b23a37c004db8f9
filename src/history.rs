//! Undo/redo history over serializable snapshots.
//!
//! DESIGN
//! ======
//! Each saved state is deep-copied by encoding it to a `serde_json::Value`, and
//! handed back by decoding, so callers never share structure with the stored
//! entries. The sequence is linear: saving after an undo drops the redo tail.
//! The sequence is bounded; the oldest entry is evicted past the cap.
//!
//! A state that fails to encode is kept as a plain clone for that one entry.
//! An entry that fails to decode leaves the cursor where it was.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::EditorConfig;
use crate::consts::HISTORY_CAP;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("snapshot encode failed: {0}")]
    Encode(serde_json::Error),
    #[error("snapshot decode failed: {0}")]
    Decode(serde_json::Error),
}

#[derive(Debug, Clone)]
enum Snapshot<T> {
    Encoded(serde_json::Value),
    Verbatim(T),
}

fn encode<T: Serialize>(state: &T) -> Result<serde_json::Value, HistoryError> {
    serde_json::to_value(state).map_err(HistoryError::Encode)
}

fn decode<T: DeserializeOwned>(value: &serde_json::Value) -> Result<T, HistoryError> {
    T::deserialize(value).map_err(HistoryError::Decode)
}

/// Bounded linear history with a cursor.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<Snapshot<T>>,
    index: usize,
    cap: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAP)
    }
}

impl<T> History<T> {
    /// Empty history holding at most `cap` entries (at least one).
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            index: 0,
            cap: cap.max(1),
        }
    }

    /// Empty history sized by `config.history_cap`.
    #[must_use]
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::with_capacity(config.history_cap)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Position of the current entry.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn clear_history(&mut self) {
        self.entries.clear();
        self.index = 0;
    }
}

impl<T: Serialize + DeserializeOwned + Clone> History<T> {
    /// Record `state` as the newest entry, dropping any redo tail.
    pub fn save_to_history(&mut self, state: &T) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        let snapshot = match encode(state) {
            Ok(value) => Snapshot::Encoded(value),
            Err(e) => {
                tracing::error!(error = %e, "history snapshot not serializable; storing as-is");
                Snapshot::Verbatim(state.clone())
            }
        };
        self.entries.push_back(snapshot);
        while self.entries.len() > self.cap {
            self.entries.pop_front();
        }
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry. `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<T> {
        if !self.can_undo() {
            return None;
        }
        let state = self.restore(self.index - 1)?;
        self.index -= 1;
        Some(state)
    }

    /// Step forward one entry. `None` at the newest entry.
    pub fn redo(&mut self) -> Option<T> {
        if !self.can_redo() {
            return None;
        }
        let state = self.restore(self.index + 1)?;
        self.index += 1;
        Some(state)
    }

    /// Copy of the entry under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        self.restore(self.index)
    }

    fn restore(&self, at: usize) -> Option<T> {
        match self.entries.get(at)? {
            Snapshot::Verbatim(state) => Some(state.clone()),
            Snapshot::Encoded(value) => match decode(value) {
                Ok(state) => Some(state),
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        index = at,
                        "history snapshot could not be restored"
                    );
                    None
                }
            },
        }
    }
}
