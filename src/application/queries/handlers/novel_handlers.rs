//! Novel Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::LibraryStorePort;
use crate::application::queries::{GetNovel, ListNovels, ListNovelsByAuthor};
use crate::domain::novel::Novel;

/// GetNovel Handler
pub struct GetNovelHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl GetNovelHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetNovel) -> Result<Novel, ApplicationError> {
        self.store
            .get_novel(&query.novel_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Novel", &query.novel_id))
    }
}

/// ListNovels Handler
pub struct ListNovelsHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl ListNovelsHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListNovels) -> Result<Vec<Novel>, ApplicationError> {
        Ok(self.store.list_novels().await?)
    }
}

/// ListNovelsByAuthor Handler
pub struct ListNovelsByAuthorHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl ListNovelsByAuthorHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListNovelsByAuthor) -> Result<Vec<Novel>, ApplicationError> {
        Ok(self.store.list_novels_by_author(&query.author_id).await?)
    }
}
