//! Store doubles and helpers for tests.
//!
//! The doubles implement [`BlockStore`] so they can sit behind a
//! [`PasteStore`] or a running server in place of a real backend.

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use blockpaste_store::{
    BlockPath, BlockReader, BlockStore, ContentId, MemoryBlockStore, PasteStore, StoreConfig,
    StoreError,
};

/// A memory store that counts calls.
///
/// Used to assert that rejected requests never reach the store.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryBlockStore,
    puts: AtomicUsize,
    gets: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    /// Total calls of either kind.
    pub fn calls(&self) -> usize {
        self.puts() + self.gets()
    }

    /// Raw bytes at `path`, without counting a get.
    pub fn block(&self, path: &BlockPath) -> Option<Bytes> {
        self.inner.block(path)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl BlockStore for CountingStore {
    async fn put(&self, data: Bytes) -> Result<BlockPath, StoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(data).await
    }

    async fn get(&self, path: &BlockPath) -> Result<BlockReader, StoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(path).await
    }
}

/// A store whose lookups never complete. Puts succeed.
#[derive(Debug, Default)]
pub struct StallingStore;

#[async_trait]
impl BlockStore for StallingStore {
    async fn put(&self, data: Bytes) -> Result<BlockPath, StoreError> {
        Ok(BlockPath::new(ContentId::for_bytes(&data)))
    }

    async fn get(&self, _path: &BlockPath) -> Result<BlockReader, StoreError> {
        std::future::pending().await
    }
}

/// A store where every operation fails with a backend error.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl BlockStore for FailingStore {
    async fn put(&self, _data: Bytes) -> Result<BlockPath, StoreError> {
        Err(StoreError::Backend("store unavailable".into()))
    }

    async fn get(&self, _path: &BlockPath) -> Result<BlockReader, StoreError> {
        Err(StoreError::Backend("store unavailable".into()))
    }
}

/// A store that answers every lookup with the same oversized object.
#[derive(Debug)]
pub struct OversizedStore {
    size: usize,
}

impl OversizedStore {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

#[async_trait]
impl BlockStore for OversizedStore {
    async fn put(&self, data: Bytes) -> Result<BlockPath, StoreError> {
        Ok(BlockPath::new(ContentId::for_bytes(&data)))
    }

    async fn get(&self, _path: &BlockPath) -> Result<BlockReader, StoreError> {
        Ok(Box::new(Cursor::new(vec![b'a'; self.size])))
    }
}

/// Store config with a short deadline, so timeout tests finish quickly.
pub fn fast_config() -> StoreConfig {
    StoreConfig {
        get_timeout: Duration::from_millis(50),
        ..StoreConfig::default()
    }
}

/// Wrap a backend in a [`PasteStore`] using [`fast_config`].
pub fn paste_store(backend: Arc<dyn BlockStore>) -> PasteStore {
    PasteStore::with_config(backend, fast_config())
}
