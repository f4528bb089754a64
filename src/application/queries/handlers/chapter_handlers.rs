//! Chapter Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::LibraryStorePort;
use crate::application::queries::{GetChapter, GetChapterNeighbors, GetChapterTree, ListChapters};
use crate::domain::novel::Chapter;
use crate::domain::{neighbors, reading_sequence, ChapterNeighbors, ChapterTree};

/// GetChapter Handler
pub struct GetChapterHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl GetChapterHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetChapter) -> Result<Chapter, ApplicationError> {
        self.store
            .get_chapter(&query.chapter_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Chapter", &query.chapter_id))
    }
}

/// ListChapters Handler
pub struct ListChaptersHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl ListChaptersHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListChapters) -> Result<Vec<Chapter>, ApplicationError> {
        Ok(self.store.list_chapters_for_novel(&query.novel_id).await?)
    }
}

/// GetChapterTree Handler
pub struct GetChapterTreeHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl GetChapterTreeHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetChapterTree) -> Result<ChapterTree, ApplicationError> {
        let chapters = self.store.list_chapters_for_novel(&query.novel_id).await?;
        Ok(ChapterTree::build(chapters))
    }
}

/// GetChapterNeighbors Handler - 上一章/下一章导航
pub struct GetChapterNeighborsHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl GetChapterNeighborsHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetChapterNeighbors,
    ) -> Result<ChapterNeighbors, ApplicationError> {
        let chapters = self.store.list_chapters_for_novel(&query.novel_id).await?;
        let sequence = reading_sequence(chapters, query.order);

        neighbors(&sequence, &query.chapter_id)
            .ok_or_else(|| ApplicationError::not_found("Chapter", &query.chapter_id))
    }
}
