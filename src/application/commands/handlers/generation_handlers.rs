//! Generation Command Handlers
//!
//! 生成调用期间不持有任何存储锁；失败时返回 GenerationFailed，
//! 不重试，也不修改草稿。

use std::sync::Arc;

use crate::application::commands::{ContinueDraft, GenerateSynopsis, SummarizeChapter};
use crate::application::draft::ChapterDraft;
use crate::application::error::ApplicationError;
use crate::application::ports::{usable_text, GenerationError, LibraryStorePort, TextGenerationPort};

fn log_failure(operation: &'static str, err: GenerationError) -> GenerationError {
    tracing::warn!(operation, error = %err, "Text generation failed");
    err
}

// ============================================================================
// GenerateSynopsis
// ============================================================================

/// GenerateSynopsis Handler
pub struct GenerateSynopsisHandler {
    generator: Arc<dyn TextGenerationPort>,
}

impl GenerateSynopsisHandler {
    pub fn new(generator: Arc<dyn TextGenerationPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, command: GenerateSynopsis) -> Result<String, ApplicationError> {
        if command.title.trim().is_empty() {
            return Err(ApplicationError::validation("a title is required to generate a synopsis"));
        }

        let text = self
            .generator
            .synopsize(&command.title, &command.genre)
            .await
            .and_then(usable_text)
            .map_err(|e| log_failure("synopsize", e))?;

        tracing::info!(title = %command.title, chars = text.chars().count(), "Synopsis generated");
        Ok(text)
    }
}

// ============================================================================
// ContinueDraft
// ============================================================================

/// ContinueDraft Handler - 续写草稿
pub struct ContinueDraftHandler {
    store: Arc<dyn LibraryStorePort>,
    generator: Arc<dyn TextGenerationPort>,
}

impl ContinueDraftHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>, generator: Arc<dyn TextGenerationPort>) -> Self {
        Self { store, generator }
    }

    /// 成功时把续写追加到草稿并返回续写内容
    pub async fn handle(
        &self,
        command: ContinueDraft,
        draft: &mut ChapterDraft,
    ) -> Result<String, ApplicationError> {
        let novel = self
            .store
            .get_novel(&command.novel_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Novel", &command.novel_id))?;

        let continuation = self
            .generator
            .continue_story(&draft.content, novel.title().as_str())
            .await
            .and_then(usable_text)
            .map_err(|e| log_failure("continue_story", e))?;

        draft.append_continuation(&continuation);

        tracing::info!(
            novel_id = %novel.id(),
            chars = continuation.chars().count(),
            "Draft continued"
        );

        Ok(continuation)
    }
}

// ============================================================================
// SummarizeChapter
// ============================================================================

/// SummarizeChapter Handler
pub struct SummarizeChapterHandler {
    store: Arc<dyn LibraryStorePort>,
    generator: Arc<dyn TextGenerationPort>,
}

impl SummarizeChapterHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>, generator: Arc<dyn TextGenerationPort>) -> Self {
        Self { store, generator }
    }

    pub async fn handle(&self, command: SummarizeChapter) -> Result<String, ApplicationError> {
        let chapter = self
            .store
            .get_chapter(&command.chapter_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Chapter", &command.chapter_id))?;

        if chapter.content().trim().is_empty() {
            return Err(ApplicationError::validation(format!(
                "chapter {} has no content to summarize",
                chapter.id()
            )));
        }

        let summary = self
            .generator
            .summarize(chapter.content())
            .await
            .and_then(usable_text)
            .map_err(|e| log_failure("summarize", e))?;

        tracing::info!(chapter_id = %chapter.id(), "Chapter summarized");
        Ok(summary)
    }
}
