//! Cadenza - Track Queue
//!
//! The play queue of the Cadenza music player.
//!
//! This crate provides:
//! - A closed set of queue actions (`QueueAction`)
//! - A pure reducer applying them (`apply`)
//! - Shuffle with a pre-shuffle backup, restored on unshuffle
//! - A state owner persisting and publishing every transition (`TrackQueue`)
//! - A bridge adapting server events, settings, and clicks (`QueueBridge`)
//!
//! # Architecture
//!
//! ```text
//! UI / server events / restore
//!          │
//!          ▼
//!     QueueBridge ──► TrackQueue::dispatch(action)
//!                          │ reducer::apply (pure)
//!                          ├─► QueuePersistence::save({list, idx})
//!                          └─► watch channels (tracks, current, next, index, shuffle)
//! ```
//!
//! `cadenza-queue` has no storage backend of its own; persistence is
//! provided through the `QueuePersistence` trait from `cadenza-core`.
//!
//! # Example: Basic Queue
//!
//! ```rust
//! use cadenza_queue::{QueueAction, TrackQueue};
//! use cadenza_core::{Track, TrackId};
//!
//! let queue = TrackQueue::in_memory();
//! let current = queue.subscribe_current();
//!
//! queue.dispatch(QueueAction::Add(vec![
//!     Track::from(TrackId::new(1)),
//!     Track::from(TrackId::new(2)),
//! ]));
//! queue.dispatch(QueueAction::Next);
//!
//! assert_eq!(current.borrow().as_ref().map(|t| t.id), Some(TrackId::new(2)));
//! ```
//!
//! # Example: Bridge
//!
//! ```rust
//! use cadenza_queue::{QueueBridge, ServerEvent, TrackQueue};
//! use cadenza_core::{EnqueueBehaviour, Track, TrackId};
//! use std::sync::Arc;
//!
//! let queue = Arc::new(TrackQueue::in_memory());
//! let bridge = QueueBridge::with_behaviour(queue.clone(), EnqueueBehaviour::default());
//!
//! bridge.add(vec![Track::from(TrackId::new(1))], false);
//! bridge.handle_event(ServerEvent::PlayTracks(vec![Track::from(TrackId::new(2))]));
//!
//! assert_eq!(queue.snapshot().index, 1);
//! ```

mod action;
mod bridge;
mod click;
mod error;
mod events;
pub mod reducer;
mod shuffle;
mod state;
mod store;

// Public exports
pub use action::QueueAction;
pub use bridge::QueueBridge;
pub use click::{ClickKind, ClickRouter, DEFAULT_DOUBLE_CLICK_WINDOW};
pub use error::{QueueError, Result};
pub use events::{ServerEvent, PLAY_TRACKS, TRACK_CHANGES, TRACK_REMOVALS};
pub use reducer::{apply, apply_with_rng};
pub use state::{QueueSnapshot, QueueState};
pub use store::TrackQueue;
