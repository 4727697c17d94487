//! Queue reducer
//!
//! `apply` is a pure transition: it takes the previous state and one action
//! and returns the next state. No I/O happens here; persistence and
//! publication are the state owner's business.
//!
//! Out-of-range indices make an action a no-op instead of an error, since
//! they usually come from a UI click racing a remote removal.

use crate::action::QueueAction;
use crate::shuffle::{scatter_upcoming, shuffle_from_current};
use crate::state::QueueState;
use cadenza_core::Track;
use rand::Rng;

/// Apply an action using the thread-local rng
pub fn apply(state: QueueState, action: QueueAction) -> QueueState {
    apply_with_rng(state, action, &mut rand::thread_rng())
}

/// Apply an action with an explicit rng for shuffles
pub fn apply_with_rng<R: Rng + ?Sized>(
    mut state: QueueState,
    action: QueueAction,
    rng: &mut R,
) -> QueueState {
    match action {
        QueueAction::Shuffle => {
            if state.backup.is_none() {
                state.backup = Some(state.list.clone());
                shuffle_from_current(&mut state.list, state.idx, rng);
                state.idx = 0;
            }
        }
        QueueAction::Unshuffle => {
            if let Some(backup) = state.backup.take() {
                let restored_idx = state
                    .current()
                    .and_then(|current| backup.iter().position(|t| t.id == current.id))
                    .unwrap_or(state.idx);
                state.list = backup;
                state.idx = if restored_idx < state.list.len() {
                    restored_idx
                } else {
                    0
                };
            }
        }
        QueueAction::Add(tracks) => {
            add_tracks(&mut state, tracks, rng);
        }
        QueueAction::Clear => {
            state.list.clear();
            state.idx = 0;
            if let Some(backup) = state.backup.as_mut() {
                backup.clear();
            }
        }
        _ if state.list.is_empty() => {}
        QueueAction::Jump(idx) => {
            if idx < state.list.len() {
                state.idx = idx;
            }
        }
        QueueAction::Next => {
            state.idx = (state.idx + 1) % state.list.len();
        }
        QueueAction::Previous => {
            state.idx = if state.idx == 0 {
                state.list.len() - 1
            } else {
                state.idx - 1
            };
        }
        QueueAction::Remove(idx) => remove(&mut state, idx),
        QueueAction::Changed(tracks) => {
            for changed in &tracks {
                replace_all(&mut state.list, changed);
                if let Some(backup) = state.backup.as_mut() {
                    replace_all(backup, changed);
                }
            }
        }
        QueueAction::Move { from, to } => move_track(&mut state, from, to),
    }
    state
}

fn remove(state: &mut QueueState, idx: usize) {
    let len = state.list.len();
    if idx >= len {
        return;
    }
    if idx < state.idx {
        state.idx -= 1;
    } else if idx == state.idx && state.idx == len - 1 {
        state.idx = 0;
    }
    let removed = state.list.remove(idx);
    if let Some(backup) = state.backup.as_mut() {
        if let Some(pos) = backup.iter().position(|t| t.id == removed.id) {
            backup.remove(pos);
        }
    }
}

fn move_track(state: &mut QueueState, from: usize, to: usize) {
    let len = state.list.len();
    if from >= len || to >= len {
        return;
    }
    let track = state.list.remove(from);
    state.list.insert(to, track);

    let idx = state.idx;
    if idx == from {
        state.idx = to;
    } else if to < idx && from > idx {
        state.idx += 1;
    } else if to > idx && from < idx {
        state.idx -= 1;
    }
}

/// Append `tracks`, or scatter them among the upcoming ones while shuffled
///
/// Returns the position the first of them landed at, `None` if there were
/// none.
pub(crate) fn add_tracks<R: Rng + ?Sized>(
    state: &mut QueueState,
    tracks: Vec<Track>,
    rng: &mut R,
) -> Option<usize> {
    match state.backup.as_mut() {
        Some(backup) => {
            let landed = scatter_upcoming(&mut state.list, state.idx, &tracks, rng);
            backup.extend(tracks);
            landed
        }
        None => {
            let landed = (!tracks.is_empty()).then_some(state.list.len());
            state.list.extend(tracks);
            landed
        }
    }
}

fn replace_all(list: &mut [Track], changed: &Track) {
    for slot in list.iter_mut().filter(|t| t.id == changed.id) {
        slot.clone_from(changed);
    }
}
