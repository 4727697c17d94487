//! Server events
//!
//! Events pushed by the media library server that affect the queue.
//! They arrive as a name plus a JSON payload:
//! - `track-changes`: tracks whose metadata changed
//! - `track-removals`: ids of tracks removed from the library
//! - `play-tracks`: tracks to play right away

use crate::error::{QueueError, Result};
use cadenza_core::{Track, TrackId};
use serde::{Deserialize, Serialize};

/// Event name for updated tracks
pub const TRACK_CHANGES: &str = "track-changes";

/// Event name for removed tracks
pub const TRACK_REMOVALS: &str = "track-removals";

/// Event name for tracks to play immediately
pub const PLAY_TRACKS: &str = "play-tracks";

/// Events consumed by the queue bridge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "args")]
pub enum ServerEvent {
    /// Tracks whose metadata changed
    #[serde(rename = "track-changes")]
    TrackChanges(Vec<Track>),

    /// Ids of tracks removed from the library
    #[serde(rename = "track-removals")]
    TrackRemovals(Vec<TrackId>),

    /// Tracks to play immediately
    #[serde(rename = "play-tracks")]
    PlayTracks(Vec<Track>),
}

impl ServerEvent {
    /// Build an event from its wire name and JSON payload
    ///
    /// Unknown names are rejected rather than ignored.
    pub fn from_named(name: &str, payload: serde_json::Value) -> Result<Self> {
        match name {
            TRACK_CHANGES => Ok(Self::TrackChanges(serde_json::from_value(payload)?)),
            TRACK_REMOVALS => Ok(Self::TrackRemovals(serde_json::from_value(payload)?)),
            PLAY_TRACKS => Ok(Self::PlayTracks(serde_json::from_value(payload)?)),
            other => Err(QueueError::UnknownEvent(other.to_string())),
        }
    }

    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Self::TrackChanges(_) => TRACK_CHANGES,
            Self::TrackRemovals(_) => TRACK_REMOVALS,
            Self::PlayTracks(_) => PLAY_TRACKS,
        }
    }
}
