//! Error types for the storage layer.

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error (file system or similar).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid storage key format.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// The backend refused the operation (quota, permissions, poisoned state).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
