//! In-memory implementation of the BlockStore trait.
//!
//! Used by tests and by ephemeral deployments. Blocks are addressed the same
//! way as the SQLite backend, so paths are interchangeable between the two.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::{Result, StoreError};
use crate::path::{BlockPath, ContentId};
use crate::traits::{BlockReader, BlockStore};

/// In-memory block store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryBlockStore {
    blocks: RwLock<HashMap<ContentId, Bytes>>,
}

impl MemoryBlockStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            blocks: RwLock::new(HashMap::new()),
        }
    }

    /// Number of distinct blocks held.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw bytes at `path`, bypassing the reader interface.
    pub fn block(&self, path: &BlockPath) -> Option<Bytes> {
        self.read().get(path.id()).cloned()
    }

    // Blocks are immutable once inserted, so a writer that panicked cannot
    // leave a half-written entry behind. Keep serving the inner map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<ContentId, Bytes>> {
        self.blocks.read().unwrap_or_else(|poisoned| {
            tracing::error!("memory block store lock poisoned; continuing with inner state");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ContentId, Bytes>> {
        self.blocks.write().unwrap_or_else(|poisoned| {
            tracing::error!("memory block store lock poisoned; continuing with inner state");
            poisoned.into_inner()
        })
    }
}

impl Default for MemoryBlockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlockStore for MemoryBlockStore {
    async fn put(&self, data: Bytes) -> Result<BlockPath> {
        let id = ContentId::for_bytes(&data);
        let mut blocks = self.write();
        blocks.entry(id.clone()).or_insert(data);
        Ok(BlockPath::new(id))
    }

    async fn get(&self, path: &BlockPath) -> Result<BlockReader> {
        let blocks = self.read();
        match blocks.get(path.id()) {
            Some(data) => Ok(Box::new(Cursor::new(data.clone()))),
            None => Err(StoreError::NotFound(path.to_string())),
        }
    }
}
