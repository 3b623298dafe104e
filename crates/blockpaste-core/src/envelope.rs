//! Paste envelopes: the byte-level packaging written to and read from the store.
//!
//! Two formats exist, and a deployment picks exactly one at startup:
//!
//! - [`EnvelopeFormat::Raw`]: the stored bytes are the paste text, nothing else.
//!   Names cannot be represented.
//! - [`EnvelopeFormat::Structured`]: a JSON object `{"name": ..., "text": ...}`.
//!   A missing name is written as `""`, and `""` reads back as no name.
//!
//! For every paste a format accepts, `decode(encode(p)) == p`.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result, ValidationError};
use crate::paste::{Paste, PasteName, MAX_PASTE_SIZE};

/// Envelope format identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeFormat {
    /// Stored bytes are exactly the paste text.
    #[default]
    Raw,
    /// Stored bytes are a JSON document with `name` and `text`.
    Structured,
}

/// The JSON shape of a structured envelope.
///
/// Also used as the `application/json` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PasteDocument {
    pub name: String,
    pub text: String,
}

impl TryFrom<&Paste> for PasteDocument {
    type Error = ValidationError;

    fn try_from(paste: &Paste) -> std::result::Result<Self, Self::Error> {
        let text = paste.text_str().ok_or(ValidationError::NonUtf8Text)?;
        Ok(Self {
            name: paste.name().map(|n| n.as_str().to_owned()).unwrap_or_default(),
            text: text.to_owned(),
        })
    }
}

impl PasteDocument {
    /// Parse a stored document. Only a JSON object with exactly the keys
    /// `name` and `text` is accepted; arrays are not read positionally.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| CoreError::Format(e.to_string()))?;

        let serde_json::Value::Object(map) = value else {
            return Err(CoreError::Format("envelope is not a JSON object".into()));
        };
        if map.len() != 2 || !map.contains_key("name") || !map.contains_key("text") {
            return Err(CoreError::Format(
                "envelope must have exactly the keys `name` and `text`".into(),
            ));
        }

        serde_json::from_value(serde_json::Value::Object(map))
            .map_err(|e| CoreError::Format(e.to_string()))
    }

    /// Validate into a paste, enforcing `max` on the text length.
    pub fn into_paste(self, max: usize) -> std::result::Result<Paste, ValidationError> {
        let name = if self.name.is_empty() {
            None
        } else {
            Some(PasteName::new(self.name)?)
        };
        Ok(Paste::with_max_size(self.text, max)?.with_name(name))
    }
}

impl EnvelopeFormat {
    /// Whether pastes in this format may carry a name.
    pub const fn supports_names(self) -> bool {
        matches!(self, Self::Structured)
    }

    /// Encode a paste into storable bytes.
    ///
    /// Fails with a validation error if the paste cannot be represented: a
    /// named paste in the raw format, or non-UTF-8 text in the structured one.
    pub fn encode(self, paste: &Paste) -> Result<Bytes> {
        match self {
            Self::Raw => {
                if paste.name().is_some() {
                    return Err(ValidationError::NameNotSupported.into());
                }
                Ok(paste.text().clone())
            }
            Self::Structured => {
                let document = PasteDocument::try_from(paste)?;
                let json = serde_json::to_vec(&document)
                    .map_err(|e| CoreError::Format(e.to_string()))?;
                Ok(Bytes::from(json))
            }
        }
    }

    /// Decode stored bytes, enforcing [`MAX_PASTE_SIZE`].
    pub fn decode(self, bytes: impl Into<Bytes>) -> Result<Paste> {
        self.decode_with_limit(bytes, MAX_PASTE_SIZE)
    }

    /// Decode stored bytes, enforcing `max` on the text length.
    ///
    /// Any structured document that does not yield a valid paste is a
    /// [`CoreError::Format`] error; nothing partial is returned.
    pub fn decode_with_limit(self, bytes: impl Into<Bytes>, max: usize) -> Result<Paste> {
        let bytes = bytes.into();
        match self {
            Self::Raw => Paste::with_max_size(bytes, max)
                .map_err(|e| CoreError::Format(e.to_string())),
            Self::Structured => PasteDocument::from_json(&bytes)?
                .into_paste(max)
                .map_err(|e| CoreError::Format(e.to_string())),
        }
    }
}

impl fmt::Display for EnvelopeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => f.write_str("raw"),
            Self::Structured => f.write_str("structured"),
        }
    }
}

impl FromStr for EnvelopeFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "structured" | "json" => Ok(Self::Structured),
            other => Err(format!("unknown envelope format: {other}")),
        }
    }
}
