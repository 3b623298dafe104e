//! Bounded-latency, bounded-size access to a [`BlockStore`].
//!
//! Every read goes through a deadline and a byte cap. Paths cross this
//! boundary in the public `/paste/<id>` scheme only.

use std::sync::Arc;
use std::time::Duration;

use blockpaste_core::MAX_PASTE_SIZE;
use bytes::Bytes;
use tokio::io::AsyncReadExt;

use crate::error::{Result, StoreError};
use crate::path::PastePath;
use crate::traits::BlockStore;

/// Default deadline for a single lookup.
pub const DEFAULT_GET_TIMEOUT: Duration = Duration::from_millis(250);

/// Limits applied by [`PasteStore`].
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    /// Deadline for locating and reading a blob, measured from call start.
    pub get_timeout: Duration,
    /// Largest blob that will be written or read back.
    pub max_blob_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            get_timeout: DEFAULT_GET_TIMEOUT,
            max_blob_size: MAX_PASTE_SIZE,
        }
    }
}

/// The service's only handle to the block store.
///
/// Cheap to clone; every clone shares the same backend.
#[derive(Clone)]
pub struct PasteStore {
    store: Arc<dyn BlockStore>,
    config: StoreConfig,
}

impl PasteStore {
    pub fn new(store: Arc<dyn BlockStore>) -> Self {
        Self::with_config(store, StoreConfig::default())
    }

    pub fn with_config(store: Arc<dyn BlockStore>, config: StoreConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Store a blob and return its public path.
    ///
    /// Blobs larger than `max_blob_size` are refused so that every stored
    /// paste can be read back whole. Backend errors are returned unchanged.
    pub async fn put(&self, blob: Bytes) -> Result<PastePath> {
        let size = blob.len();
        if size > self.config.max_blob_size {
            return Err(StoreError::TooLarge {
                size,
                max: self.config.max_blob_size,
            });
        }

        let block = self.store.put(blob).await?;
        let path = block.to_paste_path();
        tracing::debug!(%path, size, "stored paste");
        Ok(path)
    }

    /// Fetch the blob behind a public path.
    ///
    /// Fails with [`StoreError::Timeout`] if the lookup and read together
    /// exceed `get_timeout`. At most `max_blob_size` bytes are returned no
    /// matter how large the stored object is.
    pub async fn get(&self, path: &PastePath) -> Result<Bytes> {
        let block = path.to_block_path();
        let limit = self.config.max_blob_size;

        let fetch = async {
            let reader = self.store.get(&block).await?;
            let mut buf = Vec::new();
            reader.take(limit as u64).read_to_end(&mut buf).await?;
            Ok::<_, StoreError>(buf)
        };

        match tokio::time::timeout(self.config.get_timeout, fetch).await {
            Ok(result) => {
                let buf = result?;
                tracing::debug!(%path, size = buf.len(), "fetched paste");
                Ok(Bytes::from(buf))
            }
            Err(_) => {
                tracing::debug!(%path, timeout = ?self.config.get_timeout, "lookup timed out");
                Err(StoreError::Timeout(self.config.get_timeout))
            }
        }
    }
}

impl std::fmt::Debug for PasteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasteStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
