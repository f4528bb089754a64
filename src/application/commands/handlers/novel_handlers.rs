//! Novel Command Handlers

use std::sync::Arc;

use super::access::{load_caller, load_owned_novel};
use crate::application::commands::{CreateNovel, UpdateNovel};
use crate::application::error::ApplicationError;
use crate::application::ports::LibraryStorePort;
use crate::domain::novel::{Novel, NovelProfile, Title};

// ============================================================================
// CreateNovel
// ============================================================================

/// CreateNovel Handler
pub struct CreateNovelHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl CreateNovelHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CreateNovel) -> Result<Novel, ApplicationError> {
        let caller = load_caller(self.store.as_ref(), &command.caller).await?;
        if !caller.role().can_write() {
            return Err(ApplicationError::permission_denied(format!(
                "user {} with role {} cannot create novels",
                caller.id(),
                caller.role()
            )));
        }

        let profile = NovelProfile {
            title: Title::new(command.title)?,
            description: command.description,
            genre: command.genre,
            status: command.status,
            cover_url: command.cover_url,
        };

        let novel = self.store.create_novel(caller.id().clone(), profile).await?;

        tracing::info!(
            novel_id = %novel.id(),
            author_id = %novel.author_id(),
            title = %novel.title(),
            "Novel created"
        );

        Ok(novel)
    }
}

// ============================================================================
// UpdateNovel
// ============================================================================

/// UpdateNovel Handler
pub struct UpdateNovelHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl UpdateNovelHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UpdateNovel) -> Result<Novel, ApplicationError> {
        load_owned_novel(self.store.as_ref(), &command.caller, &command.novel_id).await?;

        let profile = NovelProfile {
            title: Title::new(command.title)?,
            description: command.description,
            genre: command.genre,
            status: command.status,
            cover_url: command.cover_url,
        };

        let novel = self.store.update_novel(&command.novel_id, profile).await?;

        tracing::info!(
            novel_id = %novel.id(),
            status = novel.status().as_str(),
            "Novel updated"
        );

        Ok(novel)
    }
}
