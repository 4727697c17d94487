//! Track queue persistence
//!
//! Stores `{list, idx}` as JSON under the `track-list` key.
//!
//! # Example
//!
//! ```rust
//! use cadenza_core::{PersistedQueue, QueuePersistence};
//! use cadenza_storage::{MemoryStore, TrackListStore};
//!
//! let store = TrackListStore::new(MemoryStore::new());
//! store.save(&PersistedQueue::default())?;
//! assert!(store.load()?.is_some());
//! # Ok::<(), cadenza_core::CadenzaError>(())
//! ```

use cadenza_core::{PersistedQueue, QueuePersistence, Result, TRACK_LIST_KEY};

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// `QueuePersistence` backed by a key-value store
#[derive(Debug)]
pub struct TrackListStore<S> {
    store: S,
}

impl<S: KeyValueStore> TrackListStore<S> {
    /// Persist through `store`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Forget the persisted queue
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    pub fn clear(&self) -> Result<()> {
        self.store.remove(TRACK_LIST_KEY)?;
        Ok(())
    }
}

impl<S: KeyValueStore> QueuePersistence for TrackListStore<S> {
    fn save(&self, record: &PersistedQueue) -> Result<()> {
        let json = serde_json::to_string(record).map_err(StorageError::from)?;
        self.store.set(TRACK_LIST_KEY, &json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedQueue>> {
        let Some(json) = self.store.get(TRACK_LIST_KEY)? else {
            return Ok(None);
        };
        let record = serde_json::from_str(&json).map_err(StorageError::from)?;
        Ok(Some(record))
    }
}
