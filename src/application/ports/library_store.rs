//! Library Store Port - 出站端口
//!
//! 用户、小说、章节的唯一数据源。
//! 每个操作对其他调用方是原子的：校验失败时不修改任何状态。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::novel::{Chapter, ChapterFields, ChapterId, Novel, NovelError, NovelId, NovelProfile};
use crate::domain::user::{User, UserId};

/// Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] NovelError),
}

impl StoreError {
    pub fn not_found(resource_type: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }
}

/// 章节写入请求
///
/// `id` 存在且已存储时为更新，否则新建并分配新 ID
#[derive(Debug, Clone)]
pub struct ChapterWrite {
    pub id: Option<ChapterId>,
    pub novel_id: NovelId,
    pub fields: ChapterFields,
}

/// Library Store Port
#[async_trait]
pub trait LibraryStorePort: Send + Sync {
    /// 根据 ID 查找用户
    async fn get_user(&self, id: &UserId) -> Result<Option<User>, StoreError>;

    /// 新增用户，ID 重复时返回 Duplicate
    async fn insert_user(&self, user: User) -> Result<User, StoreError>;

    /// 获取所有用户（按 ID 排序）
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// 根据 ID 查找小说
    async fn get_novel(&self, id: &NovelId) -> Result<Option<Novel>, StoreError>;

    /// 获取所有小说，按 updated_at 倒序
    async fn list_novels(&self) -> Result<Vec<Novel>, StoreError>;

    /// 获取某作者的小说，按 updated_at 倒序
    async fn list_novels_by_author(&self, author_id: &UserId) -> Result<Vec<Novel>, StoreError>;

    /// 创建小说（作者必须存在且角色为 AUTHOR）
    async fn create_novel(
        &self,
        author_id: UserId,
        profile: NovelProfile,
    ) -> Result<Novel, StoreError>;

    /// 更新小说资料
    async fn update_novel(&self, id: &NovelId, profile: NovelProfile)
        -> Result<Novel, StoreError>;

    /// 根据 ID 查找章节
    async fn get_chapter(&self, id: &ChapterId) -> Result<Option<Chapter>, StoreError>;

    /// 获取小说的全部章节
    ///
    /// 按 order_index 升序，相同时按创建顺序；小说不存在时返回 NotFound
    async fn list_chapters_for_novel(&self, novel_id: &NovelId)
        -> Result<Vec<Chapter>, StoreError>;

    /// 新建或更新章节，并推进所属小说的 updated_at
    async fn save_chapter(&self, write: ChapterWrite) -> Result<Chapter, StoreError>;

    /// 删除章节及其子章节，返回被删除的章节 ID
    async fn delete_chapter(&self, id: &ChapterId) -> Result<Vec<ChapterId>, StoreError>;
}
