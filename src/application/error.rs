//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{GenerationError, SessionError, StoreError};
use crate::domain::novel::NovelError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 校验失败（层级、作者身份、标题等）
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// 调用方无权执行该操作
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// 未登录或会话无效
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// 外部文本生成服务失败
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// 存储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// 创建校验错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed(message.into())
    }

    /// 创建权限错误
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { resource_type, id } => Self::NotFound { resource_type, id },
            StoreError::ValidationFailed(e) => Self::ValidationFailed(e.to_string()),
            StoreError::Duplicate(msg) => Self::RepositoryError(format!("duplicate entity: {}", msg)),
        }
    }
}

impl From<NovelError> for ApplicationError {
    fn from(err: NovelError) -> Self {
        Self::ValidationFailed(err.to_string())
    }
}

impl From<GenerationError> for ApplicationError {
    fn from(err: GenerationError) -> Self {
        Self::GenerationFailed(err.to_string())
    }
}

impl From<SessionError> for ApplicationError {
    fn from(err: SessionError) -> Self {
        Self::Unauthenticated(err.to_string())
    }
}
