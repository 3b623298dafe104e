//! SQLite implementation of the BlockStore trait.
//!
//! A local, persistent stand-in for a distributed block store. Uses rusqlite
//! with bundled SQLite, wrapped in async via `tokio::task::spawn_blocking`.

use std::io::Cursor;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};
use crate::migration::{self, now_millis};
use crate::path::{BlockPath, ContentId};
use crate::traits::{BlockReader, BlockStore};

/// SQLite-based block store.
///
/// Thread-safe via internal Mutex. All queries run on the blocking pool.
#[derive(Clone)]
pub struct SqliteBlockStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBlockStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|e| {
                StoreError::Database(rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
                    Some(format!("mutex poisoned: {}", e)),
                ))
            })?;
            f(&conn)
        })
        .await
        .map_err(|e| StoreError::Backend(format!("task join error: {e}")))?
    }
}

#[async_trait]
impl BlockStore for SqliteBlockStore {
    async fn put(&self, data: Bytes) -> Result<BlockPath> {
        let id = ContentId::for_bytes(&data);
        let key = id.as_str().to_owned();

        let inserted = self
            .with_conn(move |conn| {
                let n = conn.execute(
                    "INSERT OR IGNORE INTO blocks (id, data, size, stored_at)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![key, &data[..], data.len() as i64, now_millis()],
                )?;
                Ok(n > 0)
            })
            .await?;

        if inserted {
            tracing::debug!(id = %id, "stored new block");
        } else {
            tracing::debug!(id = %id, "block already present");
        }

        Ok(BlockPath::new(id))
    }

    async fn get(&self, path: &BlockPath) -> Result<BlockReader> {
        let key = path.id().as_str().to_owned();

        let data: Option<Vec<u8>> = self
            .with_conn(move |conn| {
                Ok(conn
                    .query_row(
                        "SELECT data FROM blocks WHERE id = ?1",
                        params![key],
                        |row| row.get(0),
                    )
                    .optional()?)
            })
            .await?;

        match data {
            Some(data) => Ok(Box::new(Cursor::new(Bytes::from(data)))),
            None => Err(StoreError::NotFound(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    async fn read_all(mut reader: BlockReader) -> Vec<u8> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).await.unwrap();
        buf
    }

    #[tokio::test]
    async fn test_sqlite_put_get() {
        let store = SqliteBlockStore::open_memory().unwrap();
        let path = store.put(Bytes::from_static(b"persisted")).await.unwrap();

        assert_eq!(path.id(), &ContentId::for_bytes(b"persisted"));
        let reader = store.get(&path).await.unwrap();
        assert_eq!(read_all(reader).await, b"persisted");
    }

    #[tokio::test]
    async fn test_sqlite_idempotent_put() {
        let store = SqliteBlockStore::open_memory().unwrap();
        let p1 = store.put(Bytes::from_static(b"twice")).await.unwrap();
        let p2 = store.put(Bytes::from_static(b"twice")).await.unwrap();
        assert_eq!(p1, p2);
    }

    #[tokio::test]
    async fn test_sqlite_missing() {
        let store = SqliteBlockStore::open_memory().unwrap();
        let path = BlockPath::new(ContentId::for_bytes(b"absent"));
        assert!(matches!(
            store.get(&path).await.err().unwrap(),
            StoreError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_sqlite_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("blocks.db");

        let path = {
            let store = SqliteBlockStore::open(&db).unwrap();
            store.put(Bytes::from_static(b"durable")).await.unwrap()
        };

        let store = SqliteBlockStore::open(&db).unwrap();
        let reader = store.get(&path).await.unwrap();
        assert_eq!(read_all(reader).await, b"durable");
    }
}
