//! In-Memory Library Store
//!
//! 单一 RwLock 保护全部状态：每个操作在一次加锁内完成校验与修改，
//! 对其他调用方表现为原子操作。可选的模拟延迟发生在加锁之前。

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::seed::LibrarySeed;
use crate::application::ports::{ChapterWrite, LibraryStorePort, StoreError};
use crate::domain::novel::{
    ensure_author, validate_placement, Chapter, ChapterId, Novel, NovelId, NovelProfile,
};
use crate::domain::sort_siblings;
use crate::domain::user::{User, UserId};

/// 带插入序号的章节
#[derive(Debug, Clone)]
struct StoredChapter {
    sequence: u64,
    chapter: Chapter,
}

#[derive(Debug, Default)]
struct StoreState {
    users: BTreeMap<UserId, User>,
    novels: HashMap<NovelId, Novel>,
    chapters: HashMap<ChapterId, StoredChapter>,
    next_sequence: u64,
}

impl StoreState {
    fn insert_chapter(&mut self, chapter: Chapter) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.chapters
            .insert(chapter.id().clone(), StoredChapter { sequence, chapter });
    }

    fn has_children(&self, id: &ChapterId) -> bool {
        self.chapters
            .values()
            .any(|stored| stored.chapter.parent_id() == Some(id))
    }

    fn touch_novel(&mut self, id: &NovelId) {
        if let Some(novel) = self.novels.get_mut(id) {
            novel.touch();
        }
    }
}

/// 最近更新的在前，相同时按 ID
fn most_recent_first<'a>(novels: impl Iterator<Item = &'a Novel>) -> Vec<Novel> {
    let mut novels: Vec<Novel> = novels.cloned().collect();
    novels.sort_by(|a, b| {
        b.updated_at()
            .cmp(&a.updated_at())
            .then_with(|| a.id().cmp(b.id()))
    });
    novels
}

/// 内存存储
pub struct InMemoryLibraryStore {
    state: RwLock<StoreState>,
    latency: Option<Duration>,
}

impl InMemoryLibraryStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::from_seed(LibrarySeed::empty(), None)
    }

    /// 以初始数据创建存储
    ///
    /// `latency` 为每次操作前的模拟延迟
    pub fn from_seed(seed: LibrarySeed, latency: Option<Duration>) -> Self {
        let mut state = StoreState::default();
        for user in seed.users {
            state.users.insert(user.id().clone(), user);
        }
        for novel in seed.novels {
            state.novels.insert(novel.id().clone(), novel);
        }
        for chapter in seed.chapters {
            state.insert_chapter(chapter);
        }

        tracing::debug!(
            users = state.users.len(),
            novels = state.novels.len(),
            chapters = state.chapters.len(),
            "Library store initialized"
        );

        Self {
            state: RwLock::new(state),
            latency: latency.filter(|d| !d.is_zero()),
        }
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl Default for InMemoryLibraryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibraryStorePort for InMemoryLibraryStore {
    async fn get_user(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        self.simulate_latency().await;
        Ok(self.state.read().await.users.get(id).cloned())
    }

    async fn insert_user(&self, user: User) -> Result<User, StoreError> {
        self.simulate_latency().await;
        let mut state = self.state.write().await;

        if state.users.contains_key(user.id()) {
            return Err(StoreError::Duplicate(user.id().to_string()));
        }
        state.users.insert(user.id().clone(), user.clone());

        tracing::info!(user_id = %user.id(), role = %user.role(), "User inserted");
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.simulate_latency().await;
        Ok(self.state.read().await.users.values().cloned().collect())
    }

    async fn get_novel(&self, id: &NovelId) -> Result<Option<Novel>, StoreError> {
        self.simulate_latency().await;
        Ok(self.state.read().await.novels.get(id).cloned())
    }

    async fn list_novels(&self) -> Result<Vec<Novel>, StoreError> {
        self.simulate_latency().await;
        let state = self.state.read().await;
        Ok(most_recent_first(state.novels.values()))
    }

    async fn list_novels_by_author(&self, author_id: &UserId) -> Result<Vec<Novel>, StoreError> {
        self.simulate_latency().await;
        let state = self.state.read().await;
        Ok(most_recent_first(
            state
                .novels
                .values()
                .filter(|novel| novel.is_authored_by(author_id)),
        ))
    }

    async fn create_novel(
        &self,
        author_id: UserId,
        profile: NovelProfile,
    ) -> Result<Novel, StoreError> {
        self.simulate_latency().await;
        let mut state = self.state.write().await;

        ensure_author(&author_id, state.users.get(&author_id))?;

        let novel = Novel::new(author_id, profile);
        if state.novels.contains_key(novel.id()) {
            return Err(StoreError::Duplicate(novel.id().to_string()));
        }
        state.novels.insert(novel.id().clone(), novel.clone());

        Ok(novel)
    }

    async fn update_novel(
        &self,
        id: &NovelId,
        profile: NovelProfile,
    ) -> Result<Novel, StoreError> {
        self.simulate_latency().await;
        let mut state = self.state.write().await;

        let novel = state
            .novels
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("Novel", id))?;
        novel.revise(profile);

        Ok(novel.clone())
    }

    async fn get_chapter(&self, id: &ChapterId) -> Result<Option<Chapter>, StoreError> {
        self.simulate_latency().await;
        Ok(self
            .state
            .read()
            .await
            .chapters
            .get(id)
            .map(|stored| stored.chapter.clone()))
    }

    async fn list_chapters_for_novel(
        &self,
        novel_id: &NovelId,
    ) -> Result<Vec<Chapter>, StoreError> {
        self.simulate_latency().await;
        let state = self.state.read().await;

        if !state.novels.contains_key(novel_id) {
            return Err(StoreError::not_found("Novel", novel_id));
        }

        let mut stored: Vec<&StoredChapter> = state
            .chapters
            .values()
            .filter(|stored| stored.chapter.novel_id() == novel_id)
            .collect();
        stored.sort_by_key(|stored| stored.sequence);

        let mut chapters: Vec<Chapter> = stored.into_iter().map(|s| s.chapter.clone()).collect();
        sort_siblings(&mut chapters);
        Ok(chapters)
    }

    async fn save_chapter(&self, write: ChapterWrite) -> Result<Chapter, StoreError> {
        self.simulate_latency().await;
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        if !state.novels.contains_key(&write.novel_id) {
            return Err(StoreError::not_found("Novel", &write.novel_id));
        }

        let existing_id = write
            .id
            .clone()
            .filter(|id| state.chapters.contains_key(id));

        {
            let chapters = &state.chapters;
            validate_placement(
                &write.novel_id,
                existing_id
                    .as_ref()
                    .and_then(|id| chapters.get(id))
                    .map(|stored| &stored.chapter),
                write.fields.parent_id.as_ref(),
                |id| chapters.get(id).map(|stored| &stored.chapter),
                |id| state.has_children(id),
            )?;
        }

        let saved = match existing_id {
            Some(id) => {
                let stored = state
                    .chapters
                    .get_mut(&id)
                    .ok_or_else(|| StoreError::not_found("Chapter", &id))?;
                stored.chapter.apply(write.fields);
                stored.chapter.clone()
            }
            None => {
                if let Some(requested) = &write.id {
                    tracing::debug!(
                        chapter_id = %requested,
                        "Unknown chapter id on save, creating a new chapter"
                    );
                }
                let chapter = Chapter::new(write.novel_id.clone(), write.fields);
                state.insert_chapter(chapter.clone());
                chapter
            }
        };

        state.touch_novel(&write.novel_id);

        Ok(saved)
    }

    async fn delete_chapter(&self, id: &ChapterId) -> Result<Vec<ChapterId>, StoreError> {
        self.simulate_latency().await;
        let mut state = self.state.write().await;

        let novel_id = state
            .chapters
            .get(id)
            .map(|stored| stored.chapter.novel_id().clone())
            .ok_or_else(|| StoreError::not_found("Chapter", id))?;

        let mut children: Vec<(u64, ChapterId)> = state
            .chapters
            .values()
            .filter(|stored| stored.chapter.parent_id() == Some(id))
            .map(|stored| (stored.sequence, stored.chapter.id().clone()))
            .collect();
        children.sort();

        let mut removed = Vec::with_capacity(children.len() + 1);
        removed.push(id.clone());
        removed.extend(children.into_iter().map(|(_, child)| child));

        for chapter_id in &removed {
            state.chapters.remove(chapter_id);
        }
        state.touch_novel(&novel_id);

        Ok(removed)
    }
}
