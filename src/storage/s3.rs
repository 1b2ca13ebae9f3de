//! S3 对象存储
//!
//! 通过 `object_store` 访问 S3 兼容存储。凭证、区域等默认读取标准 `AWS_*` 环境变量。

use async_trait::async_trait;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::ObjectStore;
use std::sync::Arc;
use tracing::debug;

use crate::config::config::S3Config;
use crate::error::{AppError, Result};
use crate::storage::BlobStore;

/// S3 存储桶
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    store: Arc<dyn ObjectStore>,
}

impl S3BlobStore {
    /// 根据配置创建，配置项覆盖环境变量
    pub fn new(config: &S3Config) -> Result<Self> {
        if config.bucket.trim().is_empty() {
            return Err(AppError::Config("S3 bucket name is not configured".into()));
        }

        let mut builder = AmazonS3Builder::from_env().with_bucket_name(&config.bucket);
        if let Some(region) = &config.region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = &config.endpoint {
            builder = builder.with_endpoint(endpoint);
        }
        if config.allow_http {
            builder = builder.with_allow_http(true);
        }

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: AmazonS3Builder) -> Result<Self> {
        let store = builder
            .build()
            .map_err(|e| AppError::Config(format!("invalid S3 configuration: {}", e)))?;
        Ok(Self::from_object_store(Arc::new(store)))
    }

    /// 包装任意 `ObjectStore` 实现
    pub fn from_object_store(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        // 对象路径不接受的键（如含控制字符）不可能被发布过，按不存在处理
        let location = match Path::parse(key) {
            Ok(location) => location,
            Err(e) => {
                debug!(key, error = %e, "storage key is not a valid object path");
                return Ok(None);
            }
        };
        debug!(%location, "reading blob from object storage");

        let result = match self.store.get(&location).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let bytes = result.bytes().await?;
        String::from_utf8(bytes.to_vec())
            .map(Some)
            .map_err(|e| AppError::Storage(format!("object {} is not UTF-8: {}", location, e)))
    }

    fn backend(&self) -> &'static str {
        "s3"
    }
}
