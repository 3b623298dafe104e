//! BlockStore trait: the narrow interface to the external block store.
//!
//! Blockpaste does not care how blocks are replicated or found. It needs a
//! content-addressed put and a get that yields a reader.

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::AsyncRead;

use crate::error::Result;
use crate::path::BlockPath;

/// A reader over a stored block.
///
/// Callers bound how much they read; implementations may hand back arbitrarily
/// large objects.
pub type BlockReader = Box<dyn AsyncRead + Send + Unpin>;

/// Content-addressed block storage.
///
/// Implementations must be safe for many concurrent readers and writers; one
/// instance is shared by every in-flight request.
///
/// # Design Notes
///
/// - **Content addressing**: putting the same bytes twice yields the same path.
/// - **No retries**: errors are returned as-is; callers decide policy.
/// - **Unbounded get**: `get` may wait indefinitely. Deadlines are imposed by
///   [`crate::PasteStore`].
#[async_trait]
pub trait BlockStore: Send + Sync {
    /// Store a block and return its path in the `/blocks/<id>` scheme.
    async fn put(&self, data: Bytes) -> Result<BlockPath>;

    /// Open a block for reading.
    ///
    /// Returns [`crate::StoreError::NotFound`] if no block exists at `path`.
    async fn get(&self, path: &BlockPath) -> Result<BlockReader>;
}
