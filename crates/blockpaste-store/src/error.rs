//! Error types for the store module.

use std::time::Duration;

use blockpaste_core::ValidationError;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No block exists at this path.
    #[error("block not found: {0}")]
    NotFound(String),

    /// The lookup did not finish within the deadline.
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),

    /// Blob exceeds what the adapter will ever read back.
    #[error("blob is {size} bytes, maximum is {max}")]
    TooLarge { size: usize, max: usize },

    /// Malformed path or content id.
    #[error("invalid path: {0}")]
    Invalid(#[from] ValidationError),

    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O error while reading a block.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other backend failure.
    #[error("backend error: {0}")]
    Backend(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StoreError {
    /// Absent and timed-out lookups are reported the same way to clients.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Timeout(_))
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
