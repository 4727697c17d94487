//! Click-to-add routing
//!
//! Splits a raw click stream into single and double clicks. Clicks closer
//! together than the double-click window form one group; a group of one is
//! a single click, anything more is a double click. The group acts on the
//! tracks of its first click.

use crate::bridge::QueueBridge;
use cadenza_core::Track;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Default double-click window
pub const DEFAULT_DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Kind of a classified click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    /// One click, followed by a quiet window
    Single,

    /// Two or more clicks within the window of each other
    Double,
}

/// Classifies clicks and feeds them to a bridge
#[derive(Debug, Clone, Copy)]
pub struct ClickRouter {
    window: Duration,
}

impl ClickRouter {
    /// Create a router with the given double-click window
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    /// Double-click window
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Wait for the next complete click group
    ///
    /// Returns `None` once the click stream is closed and drained.
    pub async fn next_click<T>(&self, clicks: &mut mpsc::Receiver<T>) -> Option<(T, ClickKind)> {
        let first = clicks.recv().await?;
        let mut count = 1usize;

        while let Ok(Some(_)) = tokio::time::timeout(self.window, clicks.recv()).await {
            count += 1;
        }

        let kind = if count == 1 {
            ClickKind::Single
        } else {
            ClickKind::Double
        };
        Some((first, kind))
    }

    /// Route clicks to `bridge` until the click stream closes
    pub async fn run(self, mut clicks: mpsc::Receiver<Vec<Track>>, bridge: Arc<QueueBridge>) {
        while let Some((tracks, kind)) = self.next_click(&mut clicks).await {
            tracing::debug!(?kind, tracks = tracks.len(), "Routing click");
            bridge.handle_click(tracks, kind);
        }
    }
}

impl Default for ClickRouter {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK_WINDOW)
    }
}
