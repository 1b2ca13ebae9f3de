//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 资源不存在（空文章标识）
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 存储后端错误（权限、网络、后端故障等，"不存在"除外）
    #[error("存储错误: {0}")]
    Storage(String),

    /// 存储的文章数据无法解析或缺少必需字段
    #[error("文章数据格式错误: {0}")]
    MalformedRecord(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::MalformedRecord(e.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<object_store::Error> for AppError {
    fn from(e: object_store::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl AppError {
    /// 是否为服务端故障（5xx）
    pub fn is_server_error(&self) -> bool {
        !matches!(self, AppError::NotFound(_))
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code): (u16, String) = (&self).into();
        let message = if self.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        let body = Json(ErrorResponse::new(&code, &message));
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::NotFound(_) => (404, "NOT_FOUND".to_string()),
            AppError::Storage(_) => (500, "STORAGE_ERROR".to_string()),
            AppError::MalformedRecord(_) => (500, "MALFORMED_RECORD".to_string()),
            AppError::Config(_) => (500, "INTERNAL_ERROR".to_string()),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;
