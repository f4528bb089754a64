//! Novel HTTP Handlers

use axum::{extract::State, http::HeaderMap, Json};
use serde::Deserialize;
use std::sync::Arc;

use super::auth::authenticate;
use crate::application::{CreateNovel, GetNovel, ListNovels, ListNovelsByAuthor, UpdateNovel};
use crate::domain::novel::{NovelId, NovelStatus};
use crate::infrastructure::http::dto::{novel_views, ApiResponse, NovelView};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GetNovelRequest {
    pub id: String,
}

/// 小说资料；状态必须显式给出
#[derive(Debug, Deserialize)]
pub struct NovelProfileRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub genre: String,
    pub status: NovelStatus,
    #[serde(default)]
    pub cover_url: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNovelRequest {
    pub id: String,
    #[serde(flatten)]
    pub profile: NovelProfileRequest,
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取小说列表（最近更新的在前）
pub async fn list_novels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<NovelView>>>, ApiError> {
    let novels = state.service.list_novels(ListNovels).await?;
    Ok(Json(ApiResponse::success(novel_views(&novels))))
}

/// 获取小说详情
pub async fn get_novel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetNovelRequest>,
) -> Result<Json<ApiResponse<NovelView>>, ApiError> {
    let novel = state
        .service
        .get_novel(GetNovel {
            novel_id: NovelId::from(req.id),
        })
        .await?;
    Ok(Json(ApiResponse::success(NovelView::from(&novel))))
}

/// 当前作者的小说
pub async fn my_novels(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Vec<NovelView>>>, ApiError> {
    let user = authenticate(&state, &headers).await?;
    let novels = state
        .service
        .list_novels_by_author(ListNovelsByAuthor {
            author_id: user.id().clone(),
        })
        .await?;
    Ok(Json(ApiResponse::success(novel_views(&novels))))
}

/// 创建小说，作者为当前用户
pub async fn create_novel(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<NovelProfileRequest>,
) -> Result<Json<ApiResponse<NovelView>>, ApiError> {
    let user = authenticate(&state, &headers).await?;
    let novel = state
        .service
        .create_novel(CreateNovel {
            caller: user.id().clone(),
            title: req.title,
            description: req.description,
            genre: req.genre,
            status: req.status,
            cover_url: req.cover_url,
        })
        .await?;
    Ok(Json(ApiResponse::success(NovelView::from(&novel))))
}

/// 更新小说资料
pub async fn update_novel(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<UpdateNovelRequest>,
) -> Result<Json<ApiResponse<NovelView>>, ApiError> {
    let user = authenticate(&state, &headers).await?;
    let profile = req.profile;
    let novel = state
        .service
        .update_novel(UpdateNovel {
            caller: user.id().clone(),
            novel_id: NovelId::from(req.id),
            title: profile.title,
            description: profile.description,
            genre: profile.genre,
            status: profile.status,
            cover_url: profile.cover_url,
        })
        .await?;
    Ok(Json(ApiResponse::success(NovelView::from(&novel))))
}
