//! Data Transfer Objects
//!
//! 统一响应结构与领域对象的 JSON 视图

use serde::Serialize;

use crate::domain::novel::{Chapter, Novel};
use crate::domain::user::User;
use crate::domain::{ChapterNeighbors, ChapterNode, ChapterTree};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self::success(Empty {})
    }
}

// ============================================================================
// 视图
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            role: user.role().as_str().to_string(),
            avatar_url: user.avatar_url().map(str::to_string),
            bio: user.bio().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NovelView {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub status: String,
    pub cover_url: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Novel> for NovelView {
    fn from(novel: &Novel) -> Self {
        Self {
            id: novel.id().to_string(),
            author_id: novel.author_id().to_string(),
            title: novel.title().to_string(),
            description: novel.description().to_string(),
            genre: novel.genre().to_string(),
            status: novel.status().as_str().to_string(),
            cover_url: novel.cover_url().to_string(),
            created_at: novel.created_at().to_rfc3339(),
            updated_at: novel.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChapterView {
    pub id: String,
    pub novel_id: String,
    pub parent_id: Option<String>,
    pub title: String,
    pub content: String,
    pub order_index: i32,
    pub is_published: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Chapter> for ChapterView {
    fn from(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id().to_string(),
            novel_id: chapter.novel_id().to_string(),
            parent_id: chapter.parent_id().map(|id| id.to_string()),
            title: chapter.title().to_string(),
            content: chapter.content().to_string(),
            order_index: chapter.order_index(),
            is_published: chapter.is_published(),
            created_at: chapter.created_at().to_rfc3339(),
            updated_at: chapter.updated_at().to_rfc3339(),
        }
    }
}

/// 顶层章节及其子章节
#[derive(Debug, Serialize)]
pub struct ChapterNodeView {
    #[serde(flatten)]
    pub chapter: ChapterView,
    pub children: Vec<ChapterView>,
}

impl From<&ChapterNode> for ChapterNodeView {
    fn from(node: &ChapterNode) -> Self {
        Self {
            chapter: ChapterView::from(&node.chapter),
            children: node.children.iter().map(ChapterView::from).collect(),
        }
    }
}

pub fn tree_view(tree: &ChapterTree) -> Vec<ChapterNodeView> {
    tree.roots().iter().map(ChapterNodeView::from).collect()
}

#[derive(Debug, Serialize)]
pub struct NeighborsView {
    pub previous: Option<ChapterView>,
    pub next: Option<ChapterView>,
}

impl From<&ChapterNeighbors> for NeighborsView {
    fn from(neighbors: &ChapterNeighbors) -> Self {
        Self {
            previous: neighbors.previous.as_ref().map(ChapterView::from),
            next: neighbors.next.as_ref().map(ChapterView::from),
        }
    }
}

pub fn novel_views(novels: &[Novel]) -> Vec<NovelView> {
    novels.iter().map(NovelView::from).collect()
}

pub fn chapter_views(chapters: &[Chapter]) -> Vec<ChapterView> {
    chapters.iter().map(ChapterView::from).collect()
}
