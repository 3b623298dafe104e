//! Error types for Blockpaste Core.

use thiserror::Error;

/// Core errors that can occur while building, packaging, or unsealing a paste.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The stored envelope could not be parsed.
    #[error("malformed envelope: {0}")]
    Format(String),

    /// AEAD verification failed: wrong key, tampered data, or plaintext
    /// treated as ciphertext.
    #[error("authentication failed")]
    Authentication,

    #[error("encryption error: {0}")]
    Encryption(String),
}

/// Client-caused errors. These are always detected before any store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("paste is {size} bytes, maximum is {max}")]
    TooLarge { size: usize, max: usize },

    #[error("paste name is empty")]
    EmptyName,

    #[error("paste name is {len} bytes, maximum is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("paste name contains invalid character {0:?}")]
    InvalidNameChar(char),

    #[error("paste names are not supported by the raw envelope")]
    NameNotSupported,

    #[error("paste text is not valid UTF-8")]
    NonUtf8Text,

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("invalid content id: {0}")]
    InvalidContentId(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
