//! Queue bridge
//!
//! Public mutation API of the queue plus the adapters for its external
//! inputs: the enqueue behaviour setting, server events, and clicks.
//! The bridge never touches `QueueState` directly; it only dispatches
//! actions to the shared `TrackQueue`.

use crate::action::QueueAction;
use crate::click::ClickKind;
use crate::events::ServerEvent;
use crate::store::TrackQueue;
use cadenza_core::{EnqueueBehaviour, Track, TrackId};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// Fire-and-forget front end of the track queue
#[derive(Debug, Clone)]
pub struct QueueBridge {
    queue: Arc<TrackQueue>,
    behaviour: watch::Receiver<EnqueueBehaviour>,
}

impl QueueBridge {
    /// Create a bridge over `queue`, reading the enqueue behaviour from
    /// `behaviour` (latest value wins)
    pub fn new(queue: Arc<TrackQueue>, behaviour: watch::Receiver<EnqueueBehaviour>) -> Self {
        Self { queue, behaviour }
    }

    /// Create a bridge with a fixed enqueue behaviour
    pub fn with_behaviour(queue: Arc<TrackQueue>, behaviour: EnqueueBehaviour) -> Self {
        let (tx, rx) = watch::channel(behaviour);
        // Dropping the sender freezes the value; borrow() keeps working.
        drop(tx);
        Self::new(queue, rx)
    }

    /// Underlying queue, for subscriptions
    pub fn queue(&self) -> &Arc<TrackQueue> {
        &self.queue
    }

    /// Enqueue behaviour currently in effect
    pub fn behaviour(&self) -> EnqueueBehaviour {
        *self.behaviour.borrow()
    }

    /// Replay the persisted queue at startup
    pub fn restore(&self) -> bool {
        self.queue.restore()
    }

    /// Add tracks, optionally playing them right away
    ///
    /// Playing either clears the queue first (`clear_before`) or appends the
    /// tracks and jumps to the first of them. Both steps of a play happen
    /// under one queue lock.
    pub fn add(&self, tracks: Vec<Track>, play: bool) {
        if tracks.is_empty() {
            return;
        }
        if !play {
            self.queue.dispatch(QueueAction::Add(tracks));
        } else if self.behaviour().clear_before {
            self.queue
                .dispatch_all([QueueAction::Clear, QueueAction::Add(tracks)]);
        } else {
            self.queue.add_and_jump(tracks);
        }
    }

    /// Empty the queue
    pub fn clear(&self) {
        self.queue.dispatch(QueueAction::Clear);
    }

    /// Select the next track
    pub fn play_next(&self) {
        self.queue.dispatch(QueueAction::Next);
    }

    /// Select the previous track
    pub fn play_previous(&self) {
        self.queue.dispatch(QueueAction::Previous);
    }

    /// Select the track at `idx`
    pub fn jump_to(&self, idx: usize) {
        self.queue.dispatch(QueueAction::Jump(idx));
    }

    /// Remove the track at `idx`
    pub fn remove(&self, idx: usize) {
        self.queue.dispatch(QueueAction::Remove(idx));
    }

    /// Move the track at `from` to `to`
    pub fn move_track(&self, from: usize, to: usize) {
        self.queue.dispatch(QueueAction::Move { from, to });
    }

    /// Enter shuffle mode
    pub fn shuffle(&self) {
        self.queue.dispatch(QueueAction::Shuffle);
    }

    /// Leave shuffle mode
    pub fn unshuffle(&self) {
        self.queue.dispatch(QueueAction::Unshuffle);
    }

    /// Route a classified click according to the enqueue behaviour
    pub fn handle_click(&self, tracks: Vec<Track>, kind: ClickKind) {
        let play = self.behaviour().plays_on(kind == ClickKind::Single);
        self.add(tracks, play);
    }

    /// Apply a server event
    pub fn handle_event(&self, event: ServerEvent) {
        tracing::debug!(event = event.name(), "Handling server event");
        match event {
            ServerEvent::TrackChanges(tracks) => {
                self.queue.dispatch(QueueAction::Changed(tracks));
            }
            ServerEvent::TrackRemovals(ids) => {
                for id in ids {
                    self.remove_all(id);
                }
            }
            // remote play requests never clear the queue
            ServerEvent::PlayTracks(tracks) => {
                self.queue.add_and_jump(tracks);
            }
        }
    }

    /// Forward server events until the sending side closes
    pub async fn listen(&self, mut events: mpsc::Receiver<ServerEvent>) {
        while let Some(event) = events.recv().await {
            self.handle_event(event);
        }
        tracing::debug!("Server event stream closed");
    }

    fn remove_all(&self, id: TrackId) {
        while self
            .queue
            .dispatch_with(|state| state.position_of(id).map(QueueAction::Remove))
            .is_some()
        {}
    }
}
