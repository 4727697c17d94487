/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid command: {0}")]
    Command(String),

    #[error("Storage error: {0}")]
    Storage(#[from] cadenza_storage::StorageError),
}

impl CliError {
    /// Create a command parsing error
    pub fn command(msg: impl Into<String>) -> Self {
        Self::Command(msg.into())
    }
}
