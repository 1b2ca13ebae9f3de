use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 存储后端类型
///
/// 只有 `s3` 选择对象存储，其他任何取值都回落到本地文件。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum StorageBackend {
    /// 本地文件系统
    #[default]
    File,
    /// S3 兼容对象存储
    S3,
}

impl From<String> for StorageBackend {
    fn from(value: String) -> Self {
        if value == "s3" {
            StorageBackend::S3
        } else {
            StorageBackend::File
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::S3 => write!(f, "s3"),
        }
    }
}

/// S3 配置
///
/// 凭证始终来自标准 `AWS_*` 环境变量；这里的字段只做覆盖。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct S3Config {
    /// 存储桶名称
    pub bucket: String,
    /// 区域（为空时使用 AWS_REGION）
    pub region: Option<String>,
    /// 自定义端点（S3 兼容存储）
    pub endpoint: Option<String>,
    /// 是否允许 HTTP 端点
    pub allow_http: bool,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// 后端选择
    pub backend: StorageBackend,
    /// 文件存储根目录
    pub file_dir: PathBuf,
    /// S3 配置
    pub s3: S3Config,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 存储配置
    pub storage: StorageConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 3000,
            },
            storage: StorageConfig {
                backend: StorageBackend::File,
                file_dir: PathBuf::from("./data/publish"),
                s3: S3Config::default(),
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
            },
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.storage.backend = StorageBackend::S3;
        config
    }
}
