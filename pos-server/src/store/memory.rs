//! 内存存储后端
//!
//! 进程退出即丢失，用于测试与演示。支持按集合注入写失败，
//! 以复现 "销售已写入、库存写入失败" 的场景。

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{Collection, StorageBackend, StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    collections: RwLock<HashMap<Collection, Vec<u8>>>,
    failing: RwLock<HashSet<Collection>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every subsequent write to `collection`
    pub fn fail_writes(&self, collection: Collection) {
        self.failing.write().insert(collection);
    }

    pub fn restore_writes(&self, collection: Collection) {
        self.failing.write().remove(&collection);
    }

    /// Store bytes as-is, bypassing serialization
    pub fn insert_raw(&self, collection: Collection, bytes: Vec<u8>) {
        self.collections.write().insert(collection, bytes);
    }

    pub fn raw(&self, collection: Collection) -> Option<Vec<u8>> {
        self.collections.read().get(&collection).cloned()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    fn kind(&self) -> &'static str {
        "memory"
    }

    async fn read(&self, collection: Collection) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.raw(collection))
    }

    async fn write(&self, collection: Collection, bytes: Vec<u8>) -> StoreResult<()> {
        if self.failing.read().contains(&collection) {
            return Err(StoreError::Rejected(collection));
        }
        self.insert_raw(collection, bytes);
        Ok(())
    }
}
