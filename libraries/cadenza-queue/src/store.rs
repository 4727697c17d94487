//! Queue state owner
//!
//! `TrackQueue` is the only place where `QueueState` lives. Every caller,
//! whether UI, event bridge, or startup restore, goes through `dispatch`, which
//! runs the reducer under a lock and then performs the side effects:
//!
//! 1. persist `{list, idx}` (best effort, failures are logged)
//! 2. publish the derived values on every watch channel
//!
//! Both happen before the lock is released, so subscribers observe
//! transitions in emission order and never see values from two different
//! transitions mixed together in the snapshot channel.
//!
//! Multi-step operations (`dispatch_all`, `add_and_jump`) hold the lock across
//! all their steps, so no other dispatch can land between them.

use crate::action::QueueAction;
use crate::reducer::{add_tracks, apply};
use crate::state::{QueueSnapshot, QueueState};
use cadenza_core::{QueuePersistence, Track};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

/// Outbound channels; each replays its latest value to new subscribers
struct Channels {
    snapshot: watch::Sender<QueueSnapshot>,
    tracks: watch::Sender<Arc<Vec<Track>>>,
    current: watch::Sender<Option<Track>>,
    next: watch::Sender<Option<Track>>,
    index: watch::Sender<usize>,
    is_shuffling: watch::Sender<bool>,
}

impl Channels {
    fn new(initial: &QueueSnapshot) -> Self {
        Self {
            snapshot: watch::Sender::new(initial.clone()),
            tracks: watch::Sender::new(Arc::clone(&initial.tracks)),
            current: watch::Sender::new(initial.current.clone()),
            next: watch::Sender::new(initial.next.clone()),
            index: watch::Sender::new(initial.index),
            is_shuffling: watch::Sender::new(initial.is_shuffling),
        }
    }

    fn publish(&self, snapshot: &QueueSnapshot) {
        self.tracks.send_replace(Arc::clone(&snapshot.tracks));
        self.current.send_replace(snapshot.current.clone());
        self.next.send_replace(snapshot.next.clone());
        self.index.send_replace(snapshot.index);
        self.is_shuffling.send_replace(snapshot.is_shuffling);
        self.snapshot.send_replace(snapshot.clone());
    }
}

/// Single owner of the play queue
///
/// Construct one per process and share it behind an `Arc`.
pub struct TrackQueue {
    state: Mutex<QueueState>,
    persistence: Option<Arc<dyn QueuePersistence>>,
    channels: Channels,
}

impl TrackQueue {
    /// Create an empty queue persisted through `persistence`
    pub fn new(persistence: Arc<dyn QueuePersistence>) -> Self {
        Self::with_persistence(Some(persistence))
    }

    /// Create an empty queue that is never persisted
    pub fn in_memory() -> Self {
        Self::with_persistence(None)
    }

    fn with_persistence(persistence: Option<Arc<dyn QueuePersistence>>) -> Self {
        let state = QueueState::default();
        let channels = Channels::new(&QueueSnapshot::from(&state));
        Self {
            state: Mutex::new(state),
            persistence,
            channels,
        }
    }

    /// Apply one action, persist, and publish
    ///
    /// Returns the snapshot published for this transition.
    pub fn dispatch(&self, action: QueueAction) -> QueueSnapshot {
        let mut state = self.lock();
        self.transition(&mut state, action)
    }

    /// Derive an action from the current state and apply it, atomically
    ///
    /// Nothing happens (and nothing is published) when `decide` returns
    /// `None`.
    pub fn dispatch_with<F>(&self, decide: F) -> Option<QueueSnapshot>
    where
        F: FnOnce(&QueueState) -> Option<QueueAction>,
    {
        let mut state = self.lock();
        let action = decide(&state)?;
        Some(self.transition(&mut state, action))
    }

    /// Apply several actions back to back under one lock
    ///
    /// Each transition is persisted and published as usual, but no other
    /// dispatch can interleave with them. Returns the last published
    /// snapshot, or the current one if `actions` was empty.
    pub fn dispatch_all<I>(&self, actions: I) -> QueueSnapshot
    where
        I: IntoIterator<Item = QueueAction>,
    {
        let mut state = self.lock();
        let mut last = None;
        for action in actions {
            last = Some(self.transition(&mut state, action));
        }
        last.unwrap_or_else(|| QueueSnapshot::from(&*state))
    }

    /// Add `tracks` and select the first of them, atomically
    ///
    /// While shuffled the tracks are scattered among the upcoming ones, and
    /// the jump follows the first of them to wherever it landed. Publishes
    /// two transitions (add, then jump) and returns the second; does nothing
    /// when `tracks` is empty.
    pub fn add_and_jump(&self, tracks: Vec<Track>) -> Option<QueueSnapshot> {
        let mut state = self.lock();
        tracing::debug!(action = "add", "Applying queue action");
        let landed = add_tracks(&mut state, tracks, &mut rand::thread_rng())?;
        self.commit(&state);
        Some(self.transition(&mut state, QueueAction::Jump(landed)))
    }

    fn transition(&self, state: &mut QueueState, action: QueueAction) -> QueueSnapshot {
        tracing::debug!(action = action.name(), "Applying queue action");

        let previous = std::mem::take(state);
        *state = apply(previous, action);
        self.commit(state)
    }

    /// Persist and publish `state`
    fn commit(&self, state: &QueueState) -> QueueSnapshot {
        self.persist(state);
        let snapshot = QueueSnapshot::from(state);
        self.channels.publish(&snapshot);
        snapshot
    }

    /// Replay the persisted queue, if any
    ///
    /// Missing or malformed data leaves the queue untouched and is reported
    /// as a warning. Returns whether a queue was restored.
    pub fn restore(&self) -> bool {
        let Some(persistence) = &self.persistence else {
            return false;
        };

        let record = match persistence.load() {
            Ok(Some(record)) => record,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!("Failed to restore track queue: {}", e);
                return false;
            }
        };

        tracing::info!(
            "Restoring {} queued tracks at index {}",
            record.list.len(),
            record.idx
        );
        self.dispatch_all([QueueAction::Add(record.list), QueueAction::Jump(record.idx)]);
        true
    }

    /// Current snapshot
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot::from(&*self.lock())
    }

    /// Copy of the full state, including the shuffle backup
    pub fn state(&self) -> QueueState {
        self.lock().clone()
    }

    /// Consistent snapshot of every derived value
    pub fn subscribe(&self) -> watch::Receiver<QueueSnapshot> {
        self.channels.snapshot.subscribe()
    }

    /// Ordered track list
    pub fn subscribe_tracks(&self) -> watch::Receiver<Arc<Vec<Track>>> {
        self.channels.tracks.subscribe()
    }

    /// Current track
    pub fn subscribe_current(&self) -> watch::Receiver<Option<Track>> {
        self.channels.current.subscribe()
    }

    /// Next track
    pub fn subscribe_next(&self) -> watch::Receiver<Option<Track>> {
        self.channels.next.subscribe()
    }

    /// Current index
    pub fn subscribe_index(&self) -> watch::Receiver<usize> {
        self.channels.index.subscribe()
    }

    /// Shuffle flag
    pub fn subscribe_shuffling(&self) -> watch::Receiver<bool> {
        self.channels.is_shuffling.subscribe()
    }

    fn persist(&self, state: &QueueState) {
        if let Some(persistence) = &self.persistence {
            if let Err(e) = persistence.save(&state.to_persisted()) {
                tracing::warn!("Failed to persist track queue: {}", e);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, QueueState> {
        // The reducer cannot panic mid-transition, so a poisoned lock still
        // holds a consistent state.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for TrackQueue {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for TrackQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackQueue")
            .field("state", &*self.lock())
            .field("persistent", &self.persistence.is_some())
            .finish()
    }
}
