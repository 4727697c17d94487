//! Cadenza Storage
//!
//! Key-value persistence for Cadenza: the play queue and user settings.
//!
//! # Architecture
//!
//! - **`KeyValueStore`**: string keys to raw JSON strings. `RedbStore` keeps
//!   them in one redb table inside the data directory; `MemoryStore` keeps
//!   them in a map.
//! - **Vertical Slicing**: each feature owns its keys and encoding
//!   (`track_list`, `settings`).
//!
//! # Example
//!
//! ```rust,no_run
//! use cadenza_queue::TrackQueue;
//! use cadenza_storage::{RedbStore, TrackListStore};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = RedbStore::open("/var/lib/cadenza")?;
//! let queue = TrackQueue::new(Arc::new(TrackListStore::new(store)));
//! queue.restore();
//! # Ok(())
//! # }
//! ```

mod error;
mod kv;

// Vertical slices
pub mod settings;
pub mod track_list;

pub use error::{Result, StorageError};
pub use kv::{KeyValueStore, MemoryStore, RedbStore};
pub use track_list::TrackListStore;
