//! Fake Text Generator - 离线/测试用生成器
//!
//! 固定返回预设文本或预设错误，不访问网络

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{GenerationError, TextGenerationPort};

#[derive(Debug, Clone)]
enum Behavior {
    Reply(String),
    Fail(String),
}

/// Fake Text Generator
#[derive(Debug)]
pub struct FakeTextGenerator {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl FakeTextGenerator {
    /// 每次调用都返回给定文本
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Reply(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// 每次调用都以 ServiceError 失败
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// 已收到的调用次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self, operation: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(operation, "FakeTextGenerator called");
        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Fail(message) => Err(GenerationError::ServiceError(message.clone())),
        }
    }
}

#[async_trait]
impl TextGenerationPort for FakeTextGenerator {
    async fn synopsize(&self, _title: &str, _genre: &str) -> Result<String, GenerationError> {
        self.respond("synopsize")
    }

    async fn continue_story(
        &self,
        _prior_text: &str,
        _title: &str,
    ) -> Result<String, GenerationError> {
        self.respond("continue_story")
    }

    async fn summarize(&self, _chapter_text: &str) -> Result<String, GenerationError> {
        self.respond("summarize")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replying_and_failing() {
        let ok = FakeTextGenerator::replying("canned");
        assert_eq!(ok.summarize("text").await.unwrap(), "canned");
        assert_eq!(ok.calls(), 1);

        let failing = FakeTextGenerator::failing("quota exceeded");
        assert!(matches!(
            failing.continue_story("text", "T").await,
            Err(GenerationError::ServiceError(_))
        ));
        assert_eq!(failing.calls(), 1);
    }
}
