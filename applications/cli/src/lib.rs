//! Cadenza CLI Library
//!
//! Interactive shell over the Cadenza track queue: configuration, command
//! parsing, and the session wiring queue, storage, and bridge together.
//!
//! This library exposes the core components for testing purposes.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

// Re-export commonly used types for convenience
pub use command::{Command, Setting};
pub use config::AppConfig;
pub use error::{CliError, Result};
pub use session::{format_snapshot, Reply, Session};
