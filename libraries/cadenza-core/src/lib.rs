//! Cadenza Core
//!
//! Platform-agnostic core types, traits, and error handling for the Cadenza
//! track queue.
//!
//! This crate provides the building blocks shared by the queue state machine,
//! the storage layer, and the applications wiring them together.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `EnqueueBehaviour`, `PersistedQueue`
//! - **Core Traits**: `QueuePersistence`, implemented by `cadenza-storage`
//! - **Error Handling**: Unified `CadenzaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cadenza_core::types::{Track, TrackId};
//!
//! let track = Track::new(TrackId::new(1))
//!     .with_field("path", "/music/song.mp3")
//!     .with_title("My Favorite Song");
//!
//! assert_eq!(track.id, TrackId::new(1));
//! assert_eq!(track.title(), Some("My Favorite Song"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod persistence;
pub mod types;

// Re-export commonly used types
pub use error::{CadenzaError, Result};
pub use persistence::{PersistedQueue, QueuePersistence, TRACK_LIST_KEY};

pub use types::{EnqueueBehaviour, Track, TrackId};
