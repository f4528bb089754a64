//! AI HTTP Handlers - 文本生成

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::auth::authenticate;
use crate::application::{ChapterDraft, ContinueDraft, GenerateSynopsis, SummarizeChapter};
use crate::domain::novel::{ChapterId, NovelId};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SynopsisRequest {
    pub title: String,
    #[serde(default)]
    pub genre: String,
}

#[derive(Debug, Deserialize)]
pub struct ContinueRequest {
    pub novel_id: String,
    /// 编辑器中当前的正文
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub chapter_id: String,
}

#[derive(Debug, Serialize)]
pub struct TextView {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ContinueView {
    /// 新生成的续写
    pub continuation: String,
    /// 追加续写后的完整正文
    pub content: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// 生成简介（作者）
pub async fn generate_synopsis(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<SynopsisRequest>,
) -> Result<Json<ApiResponse<TextView>>, ApiError> {
    require_writer(&state, &headers).await?;
    let text = state
        .service
        .generate_synopsis(GenerateSynopsis {
            title: req.title,
            genre: req.genre,
        })
        .await?;
    Ok(Json(ApiResponse::success(TextView { text })))
}

/// 续写草稿（作者）
pub async fn continue_story(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ContinueRequest>,
) -> Result<Json<ApiResponse<ContinueView>>, ApiError> {
    require_writer(&state, &headers).await?;

    let novel_id = NovelId::from(req.novel_id);
    let mut draft = ChapterDraft::new(novel_id.clone());
    draft.content = req.content;

    let continuation = state
        .service
        .continue_draft(ContinueDraft { novel_id }, &mut draft)
        .await?;

    Ok(Json(ApiResponse::success(ContinueView {
        continuation,
        content: draft.content,
    })))
}

/// 章节摘要（读者可用）
pub async fn summarize_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<ApiResponse<TextView>>, ApiError> {
    let text = state
        .service
        .summarize_chapter(SummarizeChapter {
            chapter_id: ChapterId::from(req.chapter_id),
        })
        .await?;
    Ok(Json(ApiResponse::success(TextView { text })))
}

async fn require_writer(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let user = authenticate(state, headers).await?;
    if !user.role().can_write() {
        return Err(ApiError::Forbidden(format!(
            "role {} cannot use writing assistance",
            user.role()
        )));
    }
    Ok(())
}
