//! 存储层模块
//!
//! 按键读取已发布的文章 JSON，支持本地文件系统和 S3 对象存储。
//! 两种后端都必须把"键不存在"和"读取失败"区分开：前者返回 `Ok(None)`，
//! 后者返回 `Err`，解析器依赖这一区分决定是外部重定向还是报错。

use async_trait::async_trait;

use crate::error::Result;

pub mod factory;
pub mod file;
pub mod s3;

pub use factory::StorageFactory;
pub use file::FileBlobStore;
pub use s3::S3BlobStore;

/// 只读的键值文本存储
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// 读取键对应的 UTF-8 文本；键不存在时返回 `Ok(None)`
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// 后端名称，用于日志和健康检查
    fn backend(&self) -> &'static str;
}
