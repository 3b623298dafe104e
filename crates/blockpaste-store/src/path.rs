//! Content ids and the two path schemes built on them.
//!
//! The block store addresses blobs as `/blocks/<id>`; clients see the same
//! blob as `/paste/<id>`. Translation is an exact prefix substitution and is
//! reversible for every prefixed string.

use std::fmt;
use std::str::FromStr;

use blockpaste_core::ValidationError;

/// Public route prefix.
pub const PASTE_PREFIX: &str = "/paste/";

/// Internal block store prefix.
pub const BLOCK_PREFIX: &str = "/blocks/";

/// Maximum content id length.
pub const MAX_CONTENT_ID_LEN: usize = 128;

/// Rewrite a public `/paste/...` path to the store's `/blocks/...` form.
///
/// Returns `None` if `public` does not start with [`PASTE_PREFIX`].
pub fn internalize(public: &str) -> Option<String> {
    public
        .strip_prefix(PASTE_PREFIX)
        .map(|rest| format!("{BLOCK_PREFIX}{rest}"))
}

/// Rewrite an internal `/blocks/...` path to the public `/paste/...` form.
///
/// Returns `None` if `internal` does not start with [`BLOCK_PREFIX`].
pub fn publicize(internal: &str) -> Option<String> {
    internal
        .strip_prefix(BLOCK_PREFIX)
        .map(|rest| format!("{PASTE_PREFIX}{rest}"))
}

/// An opaque, store-assigned identifier: 1 to 128 ASCII alphanumerics.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(String);

impl ContentId {
    /// Validate and wrap an id.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() || id.len() > MAX_CONTENT_ID_LEN {
            return Err(ValidationError::InvalidContentId(format!(
                "length {} outside 1..={}",
                id.len(),
                MAX_CONTENT_ID_LEN
            )));
        }
        if !id.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidContentId(
                "must be ASCII alphanumeric".into(),
            ));
        }
        Ok(Self(id))
    }

    /// The id the bundled backends assign: lowercase hex BLAKE3 of the bytes.
    pub fn for_bytes(data: &[u8]) -> Self {
        Self(blake3::hash(data).to_hex().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentId({})", self.0)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ContentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A path in the block store's scheme: `/blocks/<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockPath(ContentId);

impl BlockPath {
    pub fn new(id: ContentId) -> Self {
        Self(id)
    }

    /// Parse `/blocks/<id>`.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let id = s.strip_prefix(BLOCK_PREFIX).ok_or_else(|| {
            ValidationError::InvalidPath(format!("expected {BLOCK_PREFIX} prefix"))
        })?;
        Ok(Self(ContentId::new(id)?))
    }

    pub fn id(&self) -> &ContentId {
        &self.0
    }

    /// The same blob under the public scheme.
    pub fn to_paste_path(&self) -> PastePath {
        PastePath(self.0.clone())
    }
}

impl fmt::Display for BlockPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BLOCK_PREFIX}{}", self.0)
    }
}

/// A path in the public scheme: `/paste/<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PastePath(ContentId);

impl PastePath {
    pub fn new(id: ContentId) -> Self {
        Self(id)
    }

    /// Parse `/paste/<id>`.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let id = s.strip_prefix(PASTE_PREFIX).ok_or_else(|| {
            ValidationError::InvalidPath(format!("expected {PASTE_PREFIX} prefix"))
        })?;
        Ok(Self(ContentId::new(id)?))
    }

    pub fn id(&self) -> &ContentId {
        &self.0
    }

    /// The same blob under the block store scheme.
    pub fn to_block_path(&self) -> BlockPath {
        BlockPath(self.0.clone())
    }
}

impl fmt::Display for PastePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PASTE_PREFIX}{}", self.0)
    }
}
