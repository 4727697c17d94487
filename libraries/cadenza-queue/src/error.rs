//! Error types for the queue boundary
//!
//! Queue actions themselves never fail; these errors only cover inputs
//! arriving from outside (server events).

use thiserror::Error;

/// Queue boundary errors
#[derive(Debug, Error)]
pub enum QueueError {
    /// Event name not understood by the queue
    #[error("Unknown server event: {0}")]
    UnknownEvent(String),

    /// Event payload does not have the expected shape
    #[error("Invalid event payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type for queue boundary operations
pub type Result<T> = std::result::Result<T, QueueError>;
