//! The paste: a unit of user-submitted text, optionally named.
//!
//! A [`Paste`] is never mutated after construction. Packaging it for storage
//! (see [`crate::envelope`]) and sealing it (see [`crate::cipher`]) produce new
//! byte buffers rather than rewriting the paste in place.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

use crate::error::ValidationError;
use crate::validation::{validate_name, validate_size};

/// Maximum paste size in bytes (1 MiB).
pub const MAX_PASTE_SIZE: usize = 1_048_576;

/// Maximum paste name length in bytes.
pub const MAX_NAME_LEN: usize = 100;

/// A validated paste name: 1 to [`MAX_NAME_LEN`] bytes of `[A-Za-z0-9.]`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PasteName(String);

impl PasteName {
    /// Validate and wrap a name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for PasteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PasteName({})", self.0)
    }
}

impl fmt::Display for PasteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PasteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PasteName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PasteName {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

/// A paste body plus an optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paste {
    name: Option<PasteName>,
    text: Bytes,
}

impl Paste {
    /// Create an unnamed paste, enforcing [`MAX_PASTE_SIZE`].
    pub fn new(text: impl Into<Bytes>) -> Result<Self, ValidationError> {
        Self::with_max_size(text, MAX_PASTE_SIZE)
    }

    /// Create an unnamed paste, enforcing a caller-supplied size limit.
    pub fn with_max_size(text: impl Into<Bytes>, max: usize) -> Result<Self, ValidationError> {
        let text = text.into();
        validate_size(text.len(), max)?;
        Ok(Self { name: None, text })
    }

    /// Attach a name.
    pub fn named(mut self, name: PasteName) -> Self {
        self.name = Some(name);
        self
    }

    /// Attach an optional name.
    pub fn with_name(mut self, name: Option<PasteName>) -> Self {
        self.name = name;
        self
    }

    pub fn name(&self) -> Option<&PasteName> {
        self.name.as_ref()
    }

    pub fn text(&self) -> &Bytes {
        &self.text
    }

    /// The text as UTF-8, if it is valid UTF-8.
    pub fn text_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.text).ok()
    }

    pub fn into_text(self) -> Bytes {
        self.text
    }

    pub fn into_parts(self) -> (Option<PasteName>, Bytes) {
        (self.name, self.text)
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paste_new() {
        let paste = Paste::new("hello world").unwrap();
        assert_eq!(paste.text().as_ref(), b"hello world");
        assert_eq!(paste.name(), None);
        assert_eq!(paste.len(), 11);
        assert_eq!(paste.text_str(), Some("hello world"));
    }

    #[test]
    fn test_empty_paste_allowed() {
        let paste = Paste::new(Bytes::new()).unwrap();
        assert!(paste.is_empty());
    }

    #[test]
    fn test_oversized_paste_rejected() {
        let text = vec![b'x'; MAX_PASTE_SIZE + 1];
        assert!(matches!(
            Paste::new(text),
            Err(ValidationError::TooLarge { .. })
        ));

        let text = vec![b'x'; MAX_PASTE_SIZE];
        assert!(Paste::new(text).is_ok());
    }

    #[test]
    fn test_custom_limit() {
        assert!(Paste::with_max_size("12345", 5).is_ok());
        assert!(Paste::with_max_size("123456", 5).is_err());
    }

    #[test]
    fn test_named_paste() {
        let name = PasteName::new("notes.txt").unwrap();
        let paste = Paste::new("body").unwrap().named(name.clone());
        assert_eq!(paste.name(), Some(&name));

        let (n, text) = paste.into_parts();
        assert_eq!(n, Some(name));
        assert_eq!(text.as_ref(), b"body");
    }

    #[test]
    fn test_paste_name_parsing() {
        assert!("abc.def".parse::<PasteName>().is_ok());
        assert!("abc-def".parse::<PasteName>().is_err());
        assert!(PasteName::try_from(String::new()).is_err());
    }

    #[test]
    fn test_paste_name_display() {
        let name = PasteName::new("v1.0").unwrap();
        assert_eq!(name.to_string(), "v1.0");
        assert_eq!(format!("{:?}", name), "PasteName(v1.0)");
    }

    #[test]
    fn test_non_utf8_text() {
        let paste = Paste::new(vec![0xff, 0xfe]).unwrap();
        assert_eq!(paste.text_str(), None);
    }
}
