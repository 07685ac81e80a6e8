//! Snapshot persistence
//!
//! Serializes both lists as one JSON document under a fixed key and loads
//! it back. Every save overwrites; every load replaces.

use log::{debug, warn};
use thiserror::Error;

use crate::core::models::Snapshot;
use crate::core::ports::{KeyValueStore, StoreError};

/// Key the contributor analysis is stored under
pub const SNAPSHOT_KEY: &str = "contributorAnalysis";

/// Suffix of the companion key holding the last save time
const SAVED_AT_SUFFIX: &str = ".savedAt";

/// Errors from saving or loading a snapshot
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Stored data exists but is not a valid snapshot
    #[error("stored snapshot under '{key}' is malformed: {source}")]
    Parse {
        /// Key that was read
        key: String,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot could not be encoded
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// The backing store could not be used
    #[error(transparent)]
    StorageUnavailable(#[from] StoreError),
}

/// Saves and loads [`Snapshot`]s through a [`KeyValueStore`]
#[derive(Debug)]
pub struct SnapshotRepository<S> {
    store: S,
    key: String,
    record_saved_at: bool,
}

impl<S: KeyValueStore> SnapshotRepository<S> {
    /// Repository using the default [`SNAPSHOT_KEY`]
    pub fn new(store: S) -> Self {
        Self::with_key(store, SNAPSHOT_KEY)
    }

    /// Repository storing under a custom key
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            record_saved_at: true,
        }
    }

    /// Skip writing the `<key>.savedAt` companion on save
    #[must_use]
    pub const fn without_saved_at(mut self) -> Self {
        self.record_saved_at = false;
        self
    }

    /// Key this repository reads and writes
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Overwrite the stored snapshot
    ///
    /// The result reflects the snapshot write alone. The save time is written
    /// afterwards; if that fails the error is logged and the save still counts.
    pub fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(snapshot).map_err(PersistenceError::Encode)?;
        self.store.set(&self.key, &json)?;
        if self.record_saved_at {
            let saved_at_key = self.saved_at_key();
            if let Err(e) = self.store.set(&saved_at_key, &chrono::Utc::now().to_rfc3339()) {
                warn!("could not record save time under '{saved_at_key}': {e}");
            }
        }
        debug!(
            "saved {} contribution(s), {} contributor(s) under '{}'",
            snapshot.contributions.len(),
            snapshot.contributors.len(),
            self.key
        );
        Ok(())
    }

    /// Read the stored snapshot
    ///
    /// An absent key yields an empty snapshot. Malformed data is reported as
    /// [`PersistenceError::Parse`] rather than replaced.
    pub fn load(&self) -> Result<Snapshot, PersistenceError> {
        let Some(json) = self.store.get(&self.key)? else {
            debug!("no snapshot under '{}', starting empty", self.key);
            return Ok(Snapshot::empty());
        };

        serde_json::from_str(&json).map_err(|source| {
            warn!("snapshot under '{}' is malformed: {source}", self.key);
            PersistenceError::Parse {
                key: self.key.clone(),
                source,
            }
        })
    }

    /// Delete the stored snapshot and its save time
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.store.remove(&self.key)?;
        self.store.remove(&self.saved_at_key())?;
        Ok(())
    }

    /// When the snapshot was last saved (RFC 3339), if ever
    pub fn saved_at(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.store.get(&self.saved_at_key())?)
    }

    fn saved_at_key(&self) -> String {
        format!("{}{SAVED_AT_SUFFIX}", self.key)
    }
}
