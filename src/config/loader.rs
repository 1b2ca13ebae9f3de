use crate::config::config::{AppConfig, StorageBackend};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 部署环境沿用的变量名及其对应的配置键
const LEGACY_ENV_KEYS: [(&str, &str); 3] = [
    ("STORAGE_BACKEND", "storage.backend"),
    ("STORAGE_FILE_DIR", "storage.file_dir"),
    ("S3_BUCKET_NAME", "storage.s3.bucket"),
];

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 优先级（从低到高）：
    /// 1. 内置开发默认值
    /// 2. ./jako.toml
    /// 3. `JAKO_` 前缀环境变量（`__` 表示嵌套）
    /// 4. `STORAGE_BACKEND` / `STORAGE_FILE_DIR` / `S3_BUCKET_NAME`
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        Self::figment(path).extract()
    }

    fn figment(path: PathBuf) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("JAKO_").split("__"))
            .merge(
                Env::raw()
                    .only(&LEGACY_ENV_KEYS.map(|(env, _)| env))
                    .map(|key| {
                        LEGACY_ENV_KEYS
                            .iter()
                            .find(|(env, _)| key == *env)
                            .map(|(_, path)| (*path).into())
                            .unwrap_or_else(|| key.as_str().into())
                    }),
            )
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        match config.storage.backend {
            StorageBackend::File if config.storage.file_dir.as_os_str().is_empty() => {
                Err(ConfigValidationError::MissingFileDir)
            }
            StorageBackend::S3 if config.storage.s3.bucket.trim().is_empty() => {
                Err(ConfigValidationError::MissingBucket)
            }
            _ => Ok(()),
        }
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("文件存储后端需要配置 storage.file_dir")]
    MissingFileDir,

    #[error("S3 存储后端需要配置 storage.s3.bucket")]
    MissingBucket,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("jako.toml")
}
