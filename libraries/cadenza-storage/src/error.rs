/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Creating the data directory failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The redb database failed to open, read, or commit
    #[error("Database error: {0}")]
    Database(#[from] redb::Error),

    /// A stored value is not the JSON we expected
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key cannot be mapped onto the store
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}

impl From<StorageError> for cadenza_core::CadenzaError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Serialization(e) => cadenza_core::CadenzaError::Serialization(e),
            other => cadenza_core::CadenzaError::storage(other.to_string()),
        }
    }
}
