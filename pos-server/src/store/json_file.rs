//! JSON 文件存储后端
//!
//! 每个集合对应数据目录下的一个文件 (`products.json` 等)，
//! 内容为缩进格式的 JSON 数组。写入直接覆盖整个文件。

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{Collection, StorageBackend, StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    /// Use `dir` as the data directory, creating it when missing
    pub async fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| StoreError::DataDir {
                path: dir.clone(),
                source,
            })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }
}

#[async_trait]
impl StorageBackend for JsonFileBackend {
    fn kind(&self) -> &'static str {
        "json"
    }

    async fn read(&self, collection: Collection) -> StoreResult<Option<Vec<u8>>> {
        match tokio::fs::read(self.path_of(collection)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { collection, source }),
        }
    }

    async fn write(&self, collection: Collection, bytes: Vec<u8>) -> StoreResult<()> {
        tokio::fs::write(self.path_of(collection), bytes)
            .await
            .map_err(|source| StoreError::Io { collection, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CollectionStore;
    use shared::models::Product;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_creates_data_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("data");

        let backend = JsonFileBackend::open(&dir).await.unwrap();
        assert!(dir.is_dir());
        assert_eq!(backend.dir(), dir.as_path());
    }

    #[tokio::test]
    async fn test_missing_file_reads_none() {
        let tmp = TempDir::new().unwrap();
        let backend = JsonFileBackend::open(tmp.path()).await.unwrap();
        assert!(backend.read(Collection::Products).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_is_pretty_json_array() {
        let tmp = TempDir::new().unwrap();
        let backend = Arc::new(JsonFileBackend::open(tmp.path()).await.unwrap());
        let store = CollectionStore::new(backend.clone());

        store
            .save(&[Product {
                id: 1,
                name: "Water 500ml".into(),
                price: rust_decimal::Decimal::new(300, 2),
                stock: 100,
                category: "Beverages".into(),
                created_at: None,
            }])
            .await
            .unwrap();

        let text = std::fs::read_to_string(backend.path_of(Collection::Products)).unwrap();
        assert!(text.starts_with('['));
        assert!(text.contains("\n  {"));
        assert!(text.contains("\"name\": \"Water 500ml\""));
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_as_empty() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("sales.json"), "not json at all").unwrap();

        let backend = Arc::new(JsonFileBackend::open(tmp.path()).await.unwrap());
        let store = CollectionStore::new(backend);
        let sales: Vec<shared::models::Sale> = store.load().await;
        assert!(sales.is_empty());
    }
}
