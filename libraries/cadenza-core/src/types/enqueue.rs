/// Enqueue behaviour preference
use serde::{Deserialize, Serialize};

/// How clicking tracks feeds the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnqueueBehaviour {
    /// `true`: a single click enqueues and a double click plays.
    /// `false`: a single click plays and a double click enqueues.
    pub on_click: bool,

    /// When playing immediately, clear the queue first instead of appending
    /// and jumping to the new tracks
    pub clear_before: bool,
}

impl EnqueueBehaviour {
    /// Whether a click should play immediately, given whether it was a
    /// single click
    pub fn plays_on(&self, single_click: bool) -> bool {
        if self.on_click {
            !single_click
        } else {
            single_click
        }
    }
}

impl Default for EnqueueBehaviour {
    fn default() -> Self {
        Self {
            on_click: true,
            clear_before: false,
        }
    }
}
