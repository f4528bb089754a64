//! User Queries

use crate::domain::user::UserId;

/// 获取用户查询
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: UserId,
}

/// 根据会话令牌获取当前用户
#[derive(Debug, Clone)]
pub struct GetSessionUser {
    pub session_id: String,
}
