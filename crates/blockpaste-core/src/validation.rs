//! Input validation: paste names, paste sizes, and request paths.
//!
//! Everything here runs before a store is touched, so a rejected request never
//! costs a write.

use crate::error::ValidationError;
use crate::paste::{MAX_NAME_LEN, MAX_PASTE_SIZE};

/// Maximum accepted request path length in bytes.
pub const MAX_PATH_LEN: usize = 512;

/// Check that a name is non-empty, at most [`MAX_NAME_LEN`] bytes, and made
/// only of ASCII letters, digits, and `.`.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            len: name.len(),
            max: MAX_NAME_LEN,
        });
    }

    if let Some(c) = name.chars().find(|c| !is_name_char(*c)) {
        return Err(ValidationError::InvalidNameChar(c));
    }

    Ok(())
}

/// Whether `c` may appear in a paste name.
pub const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.'
}

/// Check a paste body against the size limit.
pub fn validate_size(len: usize, max: usize) -> Result<(), ValidationError> {
    if len > max {
        return Err(ValidationError::TooLarge { size: len, max });
    }
    Ok(())
}

/// Check a paste body against the default [`MAX_PASTE_SIZE`].
pub fn validate_text_len(len: usize) -> Result<(), ValidationError> {
    validate_size(len, MAX_PASTE_SIZE)
}

/// Check that a request path is absolute and not absurdly long.
pub fn validate_request_path(path: &str) -> Result<(), ValidationError> {
    if !path.starts_with('/') {
        return Err(ValidationError::InvalidPath("path must be absolute".into()));
    }

    if path.len() > MAX_PATH_LEN {
        return Err(ValidationError::InvalidPath(format!(
            "path is {} bytes, maximum is {}",
            path.len(),
            MAX_PATH_LEN
        )));
    }

    Ok(())
}
