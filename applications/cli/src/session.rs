//! Queue session
//!
//! Wires the collaborators together for one run of the shell: the redb
//! store, the persisted queue, the bridge with its enqueue behaviour, and
//! the click router task.

use crate::command::{Command, Setting};
use crate::config::AppConfig;
use crate::error::Result;
use cadenza_core::{EnqueueBehaviour, Track, TrackId};
use cadenza_queue::{ClickRouter, QueueBridge, QueueSnapshot, ServerEvent, TrackQueue};
use cadenza_storage::{settings, RedbStore, TrackListStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Reply to one executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print
    Done,
    /// Text to print
    Text(String),
    /// Leave the shell
    Quit,
}

/// Everything one shell run needs
pub struct Session {
    store: RedbStore,
    queue: Arc<TrackQueue>,
    bridge: Arc<QueueBridge>,
    behaviour: watch::Sender<EnqueueBehaviour>,
    clicks: mpsc::Sender<Vec<Track>>,
    router: JoinHandle<()>,
}

impl Session {
    /// Open the data directory and restore the persisted queue
    ///
    /// Must be called within a tokio runtime; the click router runs as a
    /// task.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let store = RedbStore::open(&config.storage.data_dir)?;

        let behaviour = resolve_behaviour(&store, config.enqueue_behaviour());
        let window = resolve_window(&store, config.double_click_window());
        tracing::info!(?behaviour, ?window, "Opening queue session");

        let queue = Arc::new(TrackQueue::new(Arc::new(TrackListStore::new(store.clone()))));
        queue.restore();

        let (behaviour_tx, behaviour_rx) = watch::channel(behaviour);
        let bridge = Arc::new(QueueBridge::new(Arc::clone(&queue), behaviour_rx));

        let (clicks, click_rx) = mpsc::channel(32);
        let router = tokio::spawn(ClickRouter::new(window).run(click_rx, Arc::clone(&bridge)));

        Ok(Self {
            store,
            queue,
            bridge,
            behaviour: behaviour_tx,
            clicks,
            router,
        })
    }

    /// Shared queue
    pub fn queue(&self) -> &Arc<TrackQueue> {
        &self.queue
    }

    /// Enqueue behaviour currently in effect
    pub fn behaviour(&self) -> EnqueueBehaviour {
        *self.behaviour.borrow()
    }

    /// Run one command
    pub async fn execute(&self, command: Command) -> Result<Reply> {
        match command {
            Command::Add { ids } => self.bridge.add(tracks(&ids), false),
            Command::Play { ids } => self.bridge.add(tracks(&ids), true),
            Command::Next => self.bridge.play_next(),
            Command::Prev => self.bridge.play_previous(),
            Command::Jump { pos } => self.bridge.jump_to(pos),
            Command::Remove { pos } => self.bridge.remove(pos),
            Command::Move { from, to } => self.bridge.move_track(from, to),
            Command::Shuffle => self.bridge.shuffle(),
            Command::Unshuffle => self.bridge.unshuffle(),
            Command::Clear => self.bridge.clear(),
            Command::Changed { id, title } => {
                let track = Track::from(id).with_title(title.join(" "));
                self.bridge
                    .handle_event(ServerEvent::TrackChanges(vec![track]));
            }
            Command::Removed { ids } => self.bridge.handle_event(ServerEvent::TrackRemovals(ids)),
            Command::Click { ids } => {
                if self.clicks.send(tracks(&ids)).await.is_err() {
                    tracing::warn!("Click router stopped, dropping click");
                }
            }
            Command::Set { setting, value } => self.apply_setting(setting, value)?,
            Command::Show => return Ok(Reply::Text(format_snapshot(&self.queue.snapshot()))),
            Command::Quit => return Ok(Reply::Quit),
        }
        Ok(Reply::Done)
    }

    /// Stop the click router after it has routed every pending click
    pub async fn close(self) {
        drop(self.clicks);
        if let Err(e) = self.router.await {
            tracing::warn!("Click router failed: {}", e);
        }
    }

    fn apply_setting(&self, setting: Setting, value: bool) -> Result<()> {
        let mut behaviour = self.behaviour();
        match setting {
            Setting::OnClick => behaviour.on_click = value,
            Setting::ClearBefore => behaviour.clear_before = value,
        }
        settings::save_enqueue_behaviour(&self.store, behaviour)?;
        self.behaviour.send_replace(behaviour);
        tracing::info!(?behaviour, "Enqueue behaviour updated");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.store.path())
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}

/// Stored behaviour wins over the configured one
fn resolve_behaviour(store: &RedbStore, configured: EnqueueBehaviour) -> EnqueueBehaviour {
    match settings::stored_enqueue_behaviour(store) {
        Ok(Some(stored)) => stored,
        Ok(None) => configured,
        Err(e) => {
            tracing::warn!("Ignoring stored enqueue behaviour: {}", e);
            configured
        }
    }
}

fn resolve_window(store: &RedbStore, configured: Duration) -> Duration {
    match settings::get_setting(store, settings::SETTING_DOUBLE_CLICK_MS) {
        Ok(Some(value)) => match value.as_u64() {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => {
                tracing::warn!("Ignoring stored double-click window: {}", value);
                configured
            }
        },
        Ok(None) => configured,
        Err(e) => {
            tracing::warn!("Ignoring stored double-click window: {}", e);
            configured
        }
    }
}

fn tracks(ids: &[TrackId]) -> Vec<Track> {
    ids.iter().copied().map(Track::from).collect()
}

/// Render a snapshot, one track per line, marking the current one
pub fn format_snapshot(snapshot: &QueueSnapshot) -> String {
    let header = format!(
        "{} tracks, index {}, shuffle {}",
        snapshot.tracks.len(),
        snapshot.index,
        if snapshot.is_shuffling { "on" } else { "off" }
    );
    let rows = snapshot.tracks.iter().enumerate().map(|(pos, track)| {
        let marker = if pos == snapshot.index { '>' } else { ' ' };
        format!("{marker} {pos:>3}  {}", track.display_title())
    });
    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}
