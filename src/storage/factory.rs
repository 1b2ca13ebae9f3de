//! 存储工厂模块
//!
//! 根据配置创建相应的存储后端实例。

use std::sync::Arc;
use tracing::info;

use crate::config::config::{StorageBackend, StorageConfig};
use crate::error::Result;
use crate::storage::{BlobStore, FileBlobStore, S3BlobStore};

/// 健康检查读取的键，存在与否都视为可用
pub const PROBE_KEY: &str = "__healthcheck__.json";

/// 存储工厂
pub struct StorageFactory;

impl StorageFactory {
    /// 根据配置创建存储实例
    pub fn create(config: &StorageConfig) -> Result<Arc<dyn BlobStore>> {
        let store: Arc<dyn BlobStore> = match config.backend {
            StorageBackend::File => {
                info!(root = %config.file_dir.display(), "using file system storage");
                Arc::new(FileBlobStore::new(config.file_dir.clone()))
            }
            StorageBackend::S3 => {
                info!(bucket = %config.s3.bucket, "using S3 storage");
                Arc::new(S3BlobStore::new(&config.s3)?)
            }
        };
        Ok(store)
    }

    /// 检查存储是否可用
    pub async fn health_check(store: &dyn BlobStore) -> Result<bool> {
        store.read(PROBE_KEY).await.map(|_| true)
    }
}
