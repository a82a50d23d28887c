//! redb 存储后端
//!
//! 所有集合存放在同一个 redb 表中，键为集合名，值为 JSON 字节。
//! `write_all` 在一个写事务内提交，销售与库存要么同时落盘，要么都不落盘。
//!
//! redb 是同步 API，所有调用都放在 `spawn_blocking` 中执行。

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};

use super::{Collection, StorageBackend, StoreResult};

/// Collection blobs: key = collection name, value = JSON array bytes
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

#[derive(Clone)]
pub struct RedbBackend {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbBackend").finish_non_exhaustive()
    }
}

impl RedbBackend {
    /// Open or create the database file
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    fn read_blocking(db: &Database, collection: Collection) -> StoreResult<Option<Vec<u8>>> {
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        Ok(table
            .get(collection.name())?
            .map(|guard| guard.value().to_vec()))
    }

    fn write_blocking(db: &Database, batch: &[(Collection, Vec<u8>)]) -> StoreResult<()> {
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            for (collection, bytes) in batch {
                table.insert(collection.name(), bytes.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for RedbBackend {
    fn kind(&self) -> &'static str {
        "redb"
    }

    async fn read(&self, collection: Collection) -> StoreResult<Option<Vec<u8>>> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || Self::read_blocking(&db, collection)).await?
    }

    async fn write(&self, collection: Collection, bytes: Vec<u8>) -> StoreResult<()> {
        self.write_all(vec![(collection, bytes)]).await
    }

    /// Single-transaction commit of the whole batch
    async fn write_all(&self, batch: Vec<(Collection, Vec<u8>)>) -> StoreResult<()> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || Self::write_blocking(&db, &batch)).await?
    }
}
