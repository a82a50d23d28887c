use std::sync::Arc;

use crate::core::{Config, StorageKind};
use crate::store::seed::seed_if_absent;
use crate::store::{
    CollectionStore, JsonFileBackend, MemoryBackend, RedbBackend, StorageBackend, StoreError,
    StoreResult,
};
use crate::services::{AuthService, CatalogService, DashboardService, SaleService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有服务共用同一个 [`CollectionStore`] (同一个后端与写入门)。
/// Clone 只复制 Arc，成本极低。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | store | 集合存储 |
/// | catalog | 商品服务 |
/// | sales | 销售服务 |
/// | dashboard | 看板服务 |
/// | auth | 登录服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: CollectionStore,
    pub catalog: CatalogService,
    pub sales: SaleService,
    pub dashboard: DashboardService,
    pub auth: AuthService,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 1. 按配置打开存储后端
    /// 2. 首次启动写入演示数据 (可关闭)
    /// 3. 构建各业务服务
    pub async fn initialize(config: &Config) -> StoreResult<Self> {
        let backend = open_backend(config).await?;
        let state = Self::with_backend(config.clone(), backend);

        if config.seed_demo_data {
            let report = seed_if_absent(&state.store).await?;
            if !report.is_empty() {
                tracing::info!(collections = ?report.seeded, "Initial data written");
            }
        }

        Ok(state)
    }

    /// Build the services over an already opened backend
    pub fn with_backend(config: Config, backend: Arc<dyn StorageBackend>) -> Self {
        let store = CollectionStore::new(backend);

        Self {
            catalog: CatalogService::new(store.clone()),
            sales: SaleService::new(store.clone()),
            dashboard: DashboardService::new(store.clone(), config.low_stock_threshold),
            auth: AuthService::new(store.clone(), config.dev_bypass_key.clone()),
            store,
            config,
        }
    }
}

async fn open_backend(config: &Config) -> StoreResult<Arc<dyn StorageBackend>> {
    let backend: Arc<dyn StorageBackend> = match config.storage {
        StorageKind::Json => Arc::new(JsonFileBackend::open(config.data_dir()).await?),
        StorageKind::Redb => {
            let dir = config.data_dir();
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|source| StoreError::DataDir { path: dir, source })?;
            Arc::new(RedbBackend::open(config.redb_path())?)
        }
        StorageKind::Memory => Arc::new(MemoryBackend::new()),
    };
    tracing::info!(backend = backend.kind(), "Storage backend ready");
    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Product, User};
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, storage: StorageKind) -> Config {
        let mut config = Config::with_overrides(dir.path().to_string_lossy(), 0);
        config.storage = storage;
        config.seed_demo_data = true;
        config
    }

    #[tokio::test]
    async fn test_initialize_json_seeds_files() {
        let dir = TempDir::new().unwrap();
        let state = ServerState::initialize(&config_for(&dir, StorageKind::Json))
            .await
            .unwrap();

        assert_eq!(state.store.backend_kind(), "json");
        assert!(dir.path().join("products.json").exists());
        assert!(dir.path().join("sales.json").exists());
        assert!(dir.path().join("users.json").exists());

        let products: Vec<Product> = state.store.load().await;
        assert_eq!(products.len(), 10);
    }

    #[tokio::test]
    async fn test_initialize_redb_seeds_admin() {
        let dir = TempDir::new().unwrap();
        let state = ServerState::initialize(&config_for(&dir, StorageKind::Redb))
            .await
            .unwrap();

        assert_eq!(state.store.backend_kind(), "redb");
        assert!(dir.path().join("pos.redb").exists());

        let users: Vec<User> = state.store.load().await;
        assert_eq!(users.len(), 1);
        assert!(users[0].active);
    }

    #[tokio::test]
    async fn test_seeding_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        let mut config = config_for(&dir, StorageKind::Memory);
        config.seed_demo_data = false;

        let state = ServerState::initialize(&config).await.unwrap();
        let products: Vec<Product> = state.store.load().await;
        assert!(products.is_empty());
    }
}
