//! Paste creation and retrieval, independent of HTTP.
//!
//! Ordering within one call is fixed:
//!
//! ```text
//! create: validate -> encode -> encrypt (optional) -> put
//! fetch:  get -> decrypt (optional) -> decode
//! ```

use blockpaste_core::{cipher, EnvelopeFormat, Paste, PasteName, ValidationError, MAX_PASTE_SIZE};
use blockpaste_store::{ContentId, PastePath, PasteStore};
use bytes::Bytes;

use crate::error::ApiError;

/// Per-deployment paste settings.
#[derive(Debug, Clone, Copy)]
pub struct ServiceConfig {
    pub format: EnvelopeFormat,
    pub max_paste_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            format: EnvelopeFormat::Raw,
            max_paste_size: MAX_PASTE_SIZE,
        }
    }
}

/// Orchestrates envelope, cipher, and store for each request.
#[derive(Debug, Clone)]
pub struct PasteService {
    store: PasteStore,
    config: ServiceConfig,
}

impl PasteService {
    pub fn new(store: PasteStore, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Store a new paste and return its public path.
    ///
    /// `name` and `text` are validated before the store is touched. A
    /// non-empty `passphrase` encrypts the encoded envelope.
    pub async fn create(
        &self,
        text: Bytes,
        name: Option<&str>,
        passphrase: Option<&str>,
    ) -> Result<PastePath, ApiError> {
        let name = match name {
            Some(_) if !self.config.format.supports_names() => {
                return Err(ValidationError::NameNotSupported.into());
            }
            Some(name) => Some(PasteName::new(name)?),
            None => None,
        };

        let paste = Paste::with_max_size(text, self.config.max_paste_size)?.with_name(name);
        let envelope = self.config.format.encode(&paste)?;

        let blob = match passphrase {
            Some(passphrase) => Bytes::from(cipher::encrypt(&envelope, passphrase)?),
            None => envelope,
        };

        let path = self.store.put(blob).await?;
        tracing::info!(
            %path,
            size = paste.len(),
            named = paste.name().is_some(),
            encrypted = passphrase.is_some(),
            "created paste"
        );
        Ok(path)
    }

    /// Resolve a content id back to a paste.
    ///
    /// A passphrase on a paste stored without one fails authentication; the
    /// stored bytes are never returned in that case.
    pub async fn fetch(&self, id: &str, passphrase: Option<&str>) -> Result<Paste, ApiError> {
        let path = PastePath::new(ContentId::new(id)?);
        let blob = self.store.get(&path).await?;

        let envelope = match passphrase {
            Some(passphrase) => Bytes::from(cipher::decrypt(&blob, passphrase)?),
            None => blob,
        };

        let limit = self.store.config().max_blob_size;
        let paste = self.config.format.decode_with_limit(envelope, limit)?;
        tracing::debug!(%path, size = paste.len(), "resolved paste");
        Ok(paste)
    }
}
