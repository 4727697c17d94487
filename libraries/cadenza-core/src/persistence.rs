//! Persistence trait for queue restart recovery

use crate::error::Result;
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Storage key holding the persisted queue
pub const TRACK_LIST_KEY: &str = "track-list";

/// Durable form of the queue: the list and the current index
///
/// Shuffle backups are never persisted; a restored queue is unshuffled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedQueue {
    /// Ordered tracks
    pub list: Vec<Track>,

    /// Current index into `list`
    pub idx: usize,
}

/// Durable slot for the queue
///
/// Implementations report failures; the queue owner decides to log and
/// carry on in memory.
pub trait QueuePersistence: Send + Sync {
    /// Write the record, replacing any previous one
    fn save(&self, record: &PersistedQueue) -> Result<()>;

    /// Read the record back
    ///
    /// Returns `Ok(None)` when nothing was saved yet and an error when the
    /// stored data is unreadable or malformed.
    fn load(&self) -> Result<Option<PersistedQueue>>;
}
