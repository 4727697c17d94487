/// Core error types for Cadenza
use thiserror::Error;

/// Result type alias using `CadenzaError`
pub type Result<T> = std::result::Result<T, CadenzaError>;

/// Core error type for Cadenza
#[derive(Error, Debug)]
pub enum CadenzaError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl CadenzaError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_message() {
        let err = CadenzaError::storage("disk full");
        assert_eq!(err.to_string(), "Storage error: disk full");
    }

    #[test]
    fn serde_error_is_transparent() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let expected = parse_err.to_string();
        let err = CadenzaError::from(parse_err);
        assert_eq!(err.to_string(), expected);
    }
}
