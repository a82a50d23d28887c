//! Collection Store - 实体集合的整体读写
//!
//! 每个实体集合 (products / sales / users) 作为一个整体资源持久化，
//! 每次变更都整体重写。
//!
//! # 组件
//!
//! - [`StorageBackend`] - 原始字节读写接口 (可替换的存储后端)
//! - [`CollectionStore`] - 类型化的 load/save，带写入串行化门
//! - [`JsonFileBackend`] - 每个集合一个 JSON 文件 (默认)
//! - [`RedbBackend`] - 嵌入式 redb，多集合单事务提交
//! - [`MemoryBackend`] - 内存实现 (测试用，支持写失败注入)
//!
//! # 失败语义
//!
//! | 操作 | 资源缺失 | 资源损坏 | I/O 失败 |
//! |------|----------|----------|----------|
//! | `load` | 空集合 | 空集合 (warn) | 空集合 (warn) |
//! | `save` | 创建 | 覆盖 | `StoreError` |

pub mod ids;
pub mod json_file;
pub mod memory;
pub mod redb_store;
pub mod seed;

pub use ids::next_id;
pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use redb_store::RedbBackend;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::AppError;
use shared::models::{Product, Sale, User};
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

/// Named entity collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Sales,
    Users,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Products, Collection::Sales, Collection::Users];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Sales => "sales",
            Collection::Users => "users",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Products => "products.json",
            Collection::Sales => "sales.json",
            Collection::Users => "users.json",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {collection}: {source}")]
    Io {
        collection: Collection,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create data directory {path:?}: {source}")]
    DataDir {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Write rejected for {0}")]
    Rejected(Collection),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::storage(err.to_string())
    }
}

/// Entity persisted as part of a collection
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> i64;
}

impl Entity for Product {
    const COLLECTION: Collection = Collection::Products;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Sale {
    const COLLECTION: Collection = Collection::Sales;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for User {
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Raw storage backend
///
/// A backend stores one opaque byte blob per collection and overwrites it
/// wholesale on every write.
#[async_trait]
pub trait StorageBackend: Send + Sync + fmt::Debug {
    /// Short backend name reported by `/api/status`
    fn kind(&self) -> &'static str;

    /// Read a collection resource, `None` when it does not exist
    async fn read(&self, collection: Collection) -> StoreResult<Option<Vec<u8>>>;

    /// Overwrite a collection resource
    async fn write(&self, collection: Collection, bytes: Vec<u8>) -> StoreResult<()>;

    /// Write several collections in order
    ///
    /// The default stops at the first failure and leaves earlier writes in
    /// place. Backends that can commit atomically override this.
    async fn write_all(&self, batch: Vec<(Collection, Vec<u8>)>) -> StoreResult<()> {
        for (collection, bytes) in batch {
            self.write(collection, bytes).await?;
        }
        Ok(())
    }

    async fn exists(&self, collection: Collection) -> StoreResult<bool> {
        Ok(self.read(collection).await?.is_some())
    }
}

/// Typed collection access shared by all services
///
/// Cloning is cheap; all clones share the backend and the write gate.
#[derive(Clone, Debug)]
pub struct CollectionStore {
    backend: Arc<dyn StorageBackend>,
    write_gate: Arc<Mutex<()>>,
}

impl CollectionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    pub fn backend_kind(&self) -> &'static str {
        self.backend.kind()
    }

    /// Load a whole collection
    ///
    /// Never fails: a missing, unreadable or unparsable resource yields an
    /// empty collection.
    pub async fn load<T: Entity>(&self) -> Vec<T> {
        let collection = T::COLLECTION;
        match self.backend.read(collection).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<T>>(&bytes) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(
                        collection = %collection,
                        error = %e,
                        "Collection is not valid JSON, treating as empty"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    collection = %collection,
                    error = %e,
                    "Failed to read collection, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite a whole collection
    pub async fn save<T: Entity>(&self, items: &[T]) -> StoreResult<()> {
        let bytes = encode(items)?;
        self.backend.write(T::COLLECTION, bytes).await
    }

    /// Overwrite two collections, `first` before `second`
    pub async fn save_pair<A: Entity, B: Entity>(&self, first: &[A], second: &[B]) -> StoreResult<()> {
        let batch = vec![(A::COLLECTION, encode(first)?), (B::COLLECTION, encode(second)?)];
        self.backend.write_all(batch).await
    }

    pub async fn exists(&self, collection: Collection) -> StoreResult<bool> {
        self.backend.exists(collection).await
    }

    /// Serialise read-modify-write cycles
    ///
    /// Every mutating operation holds this guard from its first load to its
    /// last save.
    pub async fn write_gate(&self) -> MutexGuard<'_, ()> {
        self.write_gate.lock().await
    }
}

fn encode<T: Serialize>(items: &[T]) -> StoreResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: i64, stock: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price: Decimal::new(500, 2),
            stock,
            category: "Snacks".into(),
            created_at: None,
        }
    }

    fn store_with(backend: Arc<MemoryBackend>) -> CollectionStore {
        CollectionStore::new(backend)
    }

    #[tokio::test]
    async fn test_load_missing_collection_is_empty() {
        let store = store_with(Arc::new(MemoryBackend::new()));
        let products: Vec<Product> = store.load().await;
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_collection_is_empty() {
        let backend = Arc::new(MemoryBackend::new());
        backend.insert_raw(Collection::Products, b"{ not json ]".to_vec());
        let store = store_with(backend);

        let products: Vec<Product> = store.load().await;
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_collection() {
        let store = store_with(Arc::new(MemoryBackend::new()));
        store.save(&[product(1, 5), product(2, 7)]).await.unwrap();
        store.save(&[product(3, 1)]).await.unwrap();

        let products: Vec<Product> = store.load().await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 3);
    }

    #[tokio::test]
    async fn test_save_pair_keeps_first_write_when_second_fails() {
        let backend = Arc::new(MemoryBackend::new());
        backend.fail_writes(Collection::Products);
        let store = store_with(backend.clone());

        let users: Vec<User> = Vec::new();
        let err = store
            .save_pair(&users, &[product(1, 5)])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Rejected(Collection::Products)));

        assert!(backend.raw(Collection::Users).is_some());
        assert!(backend.raw(Collection::Products).is_none());
    }

    #[tokio::test]
    async fn test_store_error_maps_to_storage_code() {
        let err: AppError = StoreError::Rejected(Collection::Sales).into();
        assert_eq!(err.code, shared::ErrorCode::StorageError);
    }
}
