//! Auth HTTP Handlers
//!
//! 会话令牌通过 `Authorization: Bearer <token>` 传递

use axum::{extract::State, http::HeaderMap, Json};
use http::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{GetSessionUser, Login, Logout};
use crate::domain::user::{User, UserRole};
use crate::infrastructure::http::dto::{ApiResponse, Empty, UserView};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: UserRole,
}

#[derive(Debug, Serialize)]
pub struct LoginView {
    pub token: String,
    pub user: UserView,
}

// ============================================================================
// 会话解析
// ============================================================================

/// 从请求头取出 Bearer 令牌
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))
}

/// 解析当前登录用户
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<User, ApiError> {
    let token = bearer_token(headers)?;
    let user = state
        .service
        .current_user(GetSessionUser {
            session_id: token.to_string(),
        })
        .await?;
    Ok(user)
}

// ============================================================================
// Handlers
// ============================================================================

/// 以角色登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginView>>, ApiError> {
    let result = state.service.login(Login { role: req.role }).await?;

    Ok(Json(ApiResponse::success(LoginView {
        token: result.session_id,
        user: UserView::from(&result.user),
    })))
}

/// 登出
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let token = bearer_token(&headers)?;
    state.service.logout(Logout {
        session_id: token.to_string(),
    })?;

    Ok(Json(ApiResponse::ok()))
}

/// 当前用户
pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<UserView>>, ApiError> {
    let user = authenticate(&state, &headers).await?;
    Ok(Json(ApiResponse::success(UserView::from(&user))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_err());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_err());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }
}
