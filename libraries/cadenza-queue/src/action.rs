//! Queue actions
//!
//! The closed set of transitions the reducer understands. Every mutation of
//! the queue, whether it comes from the user, a remote event, or a restore,
//! is expressed as one of these.

use cadenza_core::Track;
use serde::{Deserialize, Serialize};

/// A single-intent queue transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueueAction {
    /// Enter shuffle mode, keeping the current track first
    Shuffle,

    /// Leave shuffle mode, restoring the pre-shuffle order
    Unshuffle,

    /// Append tracks (or scatter them in the upcoming part while shuffling)
    Add(Vec<Track>),

    /// Empty the queue; shuffle mode survives
    Clear,

    /// Select the track at this index
    Jump(usize),

    /// Select the next track, wrapping to the first
    Next,

    /// Select the previous track, wrapping to the last
    Previous,

    /// Remove the track at this index
    Remove(usize),

    /// Replace every occurrence of these tracks (matched by id)
    Changed(Vec<Track>),

    /// Move the track at `from` to `to`
    Move {
        /// Index of the track to move
        from: usize,
        /// Destination index
        to: usize,
    },
}

impl QueueAction {
    /// Short name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shuffle => "shuffle",
            Self::Unshuffle => "unshuffle",
            Self::Add(_) => "add",
            Self::Clear => "clear",
            Self::Jump(_) => "jump",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Remove(_) => "remove",
            Self::Changed(_) => "changed",
            Self::Move { .. } => "move",
        }
    }
}
