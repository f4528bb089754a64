//! Auth Commands

use crate::domain::user::UserRole;

/// 以指定角色登录（选取该角色的第一个用户）
#[derive(Debug, Clone)]
pub struct Login {
    pub role: UserRole,
}

/// 登出
#[derive(Debug, Clone)]
pub struct Logout {
    pub session_id: String,
}
