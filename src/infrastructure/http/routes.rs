//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                GET   健康检查
//! - /api/auth/login          POST  以角色登录
//! - /api/auth/logout         POST  登出
//! - /api/auth/me             GET   当前用户
//! - /api/novel/list          GET   列出所有小说（最近更新的在前）
//! - /api/novel/get           POST  获取小说详情
//! - /api/novel/mine          GET   当前作者的小说
//! - /api/novel/create        POST  创建小说
//! - /api/novel/update        POST  更新小说资料
//! - /api/chapter/list        POST  小说章节（扁平）
//! - /api/chapter/tree        POST  小说章节树
//! - /api/chapter/get         POST  获取章节
//! - /api/chapter/save        POST  新建或更新章节
//! - /api/chapter/delete      POST  删除章节（连同子章节）
//! - /api/chapter/navigate    POST  上一章/下一章
//! - /api/ai/synopsis         POST  生成简介
//! - /api/ai/continue         POST  续写
//! - /api/ai/summarize        POST  章节摘要

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/auth", auth_routes())
        .nest("/novel", novel_routes())
        .nest("/chapter", chapter_routes())
        .nest("/ai", ai_routes())
}

/// Auth 路由
fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/me", get(handlers::me))
}

/// Novel 路由
fn novel_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_novels))
        .route("/get", post(handlers::get_novel))
        .route("/mine", get(handlers::my_novels))
        .route("/create", post(handlers::create_novel))
        .route("/update", post(handlers::update_novel))
}

/// Chapter 路由
fn chapter_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", post(handlers::list_chapters))
        .route("/tree", post(handlers::chapter_tree))
        .route("/get", post(handlers::get_chapter))
        .route("/save", post(handlers::save_chapter))
        .route("/delete", post(handlers::delete_chapter))
        .route("/navigate", post(handlers::navigate))
}

/// AI 路由
fn ai_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/synopsis", post(handlers::generate_synopsis))
        .route("/continue", post(handlers::continue_story))
        .route("/summarize", post(handlers::summarize_chapter))
}
