//! Chapter HTTP Handlers

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::auth::authenticate;
use crate::application::{
    DeleteChapter, GetChapter, GetChapterNeighbors, GetChapterTree, ListChapters, SaveChapter,
};
use crate::domain::novel::{ChapterId, NovelId};
use crate::domain::ReadingOrder;
use crate::infrastructure::http::dto::{
    chapter_views, tree_view, ApiResponse, ChapterNodeView, ChapterView, NeighborsView,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct NovelChaptersRequest {
    pub novel_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ChapterRequest {
    pub id: String,
}

/// 新建或更新章节，`id` 为空时新建
#[derive(Debug, Deserialize)]
pub struct SaveChapterRequest {
    pub id: Option<String>,
    pub novel_id: String,
    pub parent_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_published")]
    pub is_published: bool,
}

fn default_published() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub novel_id: String,
    pub chapter_id: String,
    #[serde(default)]
    pub order: ReadingOrder,
}

#[derive(Debug, Serialize)]
pub struct DeleteChapterView {
    pub removed: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// 小说章节（扁平列表）
pub async fn list_chapters(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NovelChaptersRequest>,
) -> Result<Json<ApiResponse<Vec<ChapterView>>>, ApiError> {
    let chapters = state
        .service
        .list_chapters(ListChapters {
            novel_id: NovelId::from(req.novel_id),
        })
        .await?;
    Ok(Json(ApiResponse::success(chapter_views(&chapters))))
}

/// 小说章节树
pub async fn chapter_tree(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NovelChaptersRequest>,
) -> Result<Json<ApiResponse<Vec<ChapterNodeView>>>, ApiError> {
    let tree = state
        .service
        .chapter_tree(GetChapterTree {
            novel_id: NovelId::from(req.novel_id),
        })
        .await?;
    Ok(Json(ApiResponse::success(tree_view(&tree))))
}

/// 获取章节
pub async fn get_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChapterRequest>,
) -> Result<Json<ApiResponse<ChapterView>>, ApiError> {
    let chapter = state
        .service
        .get_chapter(GetChapter {
            chapter_id: ChapterId::from(req.id),
        })
        .await?;
    Ok(Json(ApiResponse::success(ChapterView::from(&chapter))))
}

/// 保存章节
pub async fn save_chapter(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<SaveChapterRequest>,
) -> Result<Json<ApiResponse<ChapterView>>, ApiError> {
    let user = authenticate(&state, &headers).await?;
    let chapter = state
        .service
        .save_chapter(SaveChapter {
            caller: user.id().clone(),
            chapter_id: req.id.map(ChapterId::from),
            novel_id: NovelId::from(req.novel_id),
            parent_id: req.parent_id.map(ChapterId::from),
            title: req.title,
            content: req.content,
            order_index: req.order_index,
            is_published: req.is_published,
        })
        .await?;
    Ok(Json(ApiResponse::success(ChapterView::from(&chapter))))
}

/// 删除章节（连同子章节）
pub async fn delete_chapter(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ChapterRequest>,
) -> Result<Json<ApiResponse<DeleteChapterView>>, ApiError> {
    let user = authenticate(&state, &headers).await?;
    let removed = state
        .service
        .delete_chapter(DeleteChapter {
            caller: user.id().clone(),
            chapter_id: ChapterId::from(req.id),
        })
        .await?;
    Ok(Json(ApiResponse::success(DeleteChapterView {
        removed: removed.iter().map(|id| id.to_string()).collect(),
    })))
}

/// 上一章/下一章
pub async fn navigate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<ApiResponse<NeighborsView>>, ApiError> {
    let neighbors = state
        .service
        .chapter_neighbors(GetChapterNeighbors {
            novel_id: NovelId::from(req.novel_id),
            chapter_id: ChapterId::from(req.chapter_id),
            order: req.order,
        })
        .await?;
    Ok(Json(ApiResponse::success(NeighborsView::from(&neighbors))))
}
