//! Queue state and its derived projections

use cadenza_core::{PersistedQueue, Track, TrackId};
use std::sync::Arc;

/// The queue itself
///
/// ```text
/// list:   [A, B, C, D]
///                ^
///               idx
/// backup: Some([D, C, A, B])   (pre-shuffle order, only while shuffling)
/// ```
///
/// `idx` is always a valid index into `list` when `list` is non-empty, and
/// 0 otherwise. Only the reducer produces new states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueState {
    /// Ordered tracks; duplicates allowed
    pub list: Vec<Track>,

    /// Index of the current track
    pub idx: usize,

    /// Pre-shuffle order, `Some` iff shuffle mode is on (possibly empty)
    pub backup: Option<Vec<Track>>,
}

impl QueueState {
    /// Current track, if any
    pub fn current(&self) -> Option<&Track> {
        self.list.get(self.idx)
    }

    /// Track after the current one, without wrapping
    pub fn next(&self) -> Option<&Track> {
        self.list.get(self.idx + 1)
    }

    /// Whether shuffle mode is on
    pub fn is_shuffling(&self) -> bool {
        self.backup.is_some()
    }

    /// Position of the first occurrence of a track
    pub fn position_of(&self, id: TrackId) -> Option<usize> {
        self.list.iter().position(|t| t.id == id)
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The part that survives a restart
    pub fn to_persisted(&self) -> PersistedQueue {
        PersistedQueue {
            list: self.list.clone(),
            idx: self.idx,
        }
    }
}

/// Consistent read-only view published after every transition
///
/// All fields come from the same transition, so subscribers never observe a
/// `current` that disagrees with `tracks`/`index`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueSnapshot {
    /// Ordered tracks
    pub tracks: Arc<Vec<Track>>,

    /// Current index
    pub index: usize,

    /// Current track
    pub current: Option<Track>,

    /// Next track, `None` on the last track
    pub next: Option<Track>,

    /// Whether shuffle mode is on
    pub is_shuffling: bool,
}

impl From<&QueueState> for QueueSnapshot {
    fn from(state: &QueueState) -> Self {
        Self {
            tracks: Arc::new(state.list.clone()),
            index: state.idx,
            current: state.current().cloned(),
            next: state.next().cloned(),
            is_shuffling: state.is_shuffling(),
        }
    }
}
