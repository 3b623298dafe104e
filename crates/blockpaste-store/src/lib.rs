//! # Blockpaste Store
//!
//! Storage side of Blockpaste: the [`BlockStore`] trait, two bundled
//! backends, path translation, and the [`PasteStore`] adapter that bounds
//! every lookup by time and size.
//!
//! ## Path schemes
//!
//! ```text
//! public:   /paste/<id>    (what clients see)
//! internal: /blocks/<id>   (what the block store sees)
//! ```
//!
//! ## Backends
//!
//! - [`MemoryBlockStore`] - Fast, ephemeral, for testing
//! - [`SqliteBlockStore`] - Persistent, BLAKE3 content addressed
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use blockpaste_store::{MemoryBlockStore, PasteStore};
//!
//! # async fn example() -> blockpaste_store::Result<()> {
//! let store = PasteStore::new(Arc::new(MemoryBlockStore::new()));
//! let path = store.put("hello".into()).await?;
//! let blob = store.get(&path).await?;
//! assert_eq!(&blob[..], b"hello");
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod error;
pub mod memory;
pub mod migration;
pub mod path;
pub mod sqlite;
pub mod traits;

pub use adapter::{PasteStore, StoreConfig, DEFAULT_GET_TIMEOUT};
pub use error::{Result, StoreError};
pub use memory::MemoryBlockStore;
pub use path::{
    internalize, publicize, BlockPath, ContentId, PastePath, BLOCK_PREFIX, MAX_CONTENT_ID_LEN,
    PASTE_PREFIX,
};
pub use sqlite::SqliteBlockStore;
pub use traits::{BlockReader, BlockStore};
