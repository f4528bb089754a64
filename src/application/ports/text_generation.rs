//! Text Generation Port - 外部生成式文本服务抽象
//!
//! 三个操作：生成简介、续写、章节摘要。
//! 任何失败都必须以 GenerationError 返回，空文本不算成功。

use async_trait::async_trait;
use thiserror::Error;

/// 文本生成错误
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Text generation service not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Service returned no usable text")]
    EmptyResponse,
}

/// 校验生成结果：去掉首尾空白，空文本视为失败
pub fn usable_text(text: String) -> Result<String, GenerationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    if trimmed.len() == text.len() {
        Ok(text)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Text Generation Port
#[async_trait]
pub trait TextGenerationPort: Send + Sync {
    /// 根据标题和类型生成小说简介
    async fn synopsize(&self, title: &str, genre: &str) -> Result<String, GenerationError>;

    /// 接着已有正文续写
    async fn continue_story(&self, prior_text: &str, title: &str)
        -> Result<String, GenerationError>;

    /// 为读者生成章节摘要
    async fn summarize(&self, chapter_text: &str) -> Result<String, GenerationError>;

    /// 检查服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_text_rejects_blank() {
        assert!(matches!(usable_text(String::new()), Err(GenerationError::EmptyResponse)));
        assert!(matches!(usable_text(" \n\t".to_string()), Err(GenerationError::EmptyResponse)));
    }

    #[test]
    fn test_usable_text_trims() {
        assert_eq!(usable_text("\n续写内容\n".to_string()).unwrap(), "续写内容");
        assert_eq!(usable_text("ok".to_string()).unwrap(), "ok");
    }
}
