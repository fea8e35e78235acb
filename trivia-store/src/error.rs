//! Error types for the store layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Row not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Persisted data that cannot be interpreted (e.g. a non-numeric
    /// category key).
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
