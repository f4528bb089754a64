//! Chapter Command Handlers

use std::sync::Arc;

use super::access::load_owned_novel;
use crate::application::commands::{DeleteChapter, SaveChapter};
use crate::application::error::ApplicationError;
use crate::application::ports::{ChapterWrite, LibraryStorePort};
use crate::domain::novel::{Chapter, ChapterFields, ChapterId, Title};

// ============================================================================
// SaveChapter
// ============================================================================

/// SaveChapter Handler - 新建或更新章节
pub struct SaveChapterHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl SaveChapterHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SaveChapter) -> Result<Chapter, ApplicationError> {
        load_owned_novel(self.store.as_ref(), &command.caller, &command.novel_id).await?;

        let is_update = command.chapter_id.is_some();
        let write = ChapterWrite {
            id: command.chapter_id,
            novel_id: command.novel_id,
            fields: ChapterFields {
                parent_id: command.parent_id,
                title: Title::new(command.title)?,
                content: command.content,
                order_index: command.order_index,
                is_published: command.is_published,
            },
        };

        let chapter = self.store.save_chapter(write).await?;

        tracing::info!(
            chapter_id = %chapter.id(),
            novel_id = %chapter.novel_id(),
            parent_id = ?chapter.parent_id().map(|id| id.as_str()),
            order_index = chapter.order_index(),
            update = is_update,
            "Chapter saved"
        );

        Ok(chapter)
    }
}

// ============================================================================
// DeleteChapter
// ============================================================================

/// DeleteChapter Handler - 子章节一并删除
pub struct DeleteChapterHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl DeleteChapterHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: DeleteChapter) -> Result<Vec<ChapterId>, ApplicationError> {
        let chapter = self
            .store
            .get_chapter(&command.chapter_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Chapter", &command.chapter_id))?;

        load_owned_novel(self.store.as_ref(), &command.caller, chapter.novel_id()).await?;

        let removed = self.store.delete_chapter(&command.chapter_id).await?;

        tracing::info!(
            chapter_id = %command.chapter_id,
            novel_id = %chapter.novel_id(),
            removed = removed.len(),
            "Chapter deleted"
        );

        Ok(removed)
    }
}
