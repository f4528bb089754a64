//! Session Manager Port - 登录会话生命周期管理
//!
//! 模拟登录：按角色选定演示用户并发放会话令牌。
//! 具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::user::{UserId, UserRole};

/// Session Manager 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session already exists: {0}")]
    AlreadyExists(String),

    #[error("Session expired: {0}")]
    Expired(String),
}

/// 登录会话（in-memory）
#[derive(Debug, Clone)]
pub struct Session {
    /// 会话令牌
    pub id: String,
    pub user_id: UserId,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().simple().to_string(),
            user_id,
            role,
            created_at: now,
            last_activity: now,
        }
    }

    /// 空闲时间是否超过给定秒数
    ///
    /// 超出 chrono 可表示范围的超时视为永不过期
    pub fn is_idle_for(&self, idle_timeout_secs: u64, now: DateTime<Utc>) -> bool {
        match idle_timeout(idle_timeout_secs) {
            Some(timeout) => now - self.last_activity > timeout,
            None => false,
        }
    }
}

/// 秒数转为 chrono 时长，超出范围时返回 None
pub fn idle_timeout(secs: u64) -> Option<chrono::Duration> {
    i64::try_from(secs)
        .ok()
        .and_then(chrono::Duration::try_seconds)
}

/// Session Manager Port
///
/// 管理登录会话的生命周期，所有状态存储在内存中
pub trait SessionManagerPort: Send + Sync {
    /// 创建新会话
    fn create(&self, session: Session) -> Result<String, SessionError>;

    /// 获取会话
    fn get(&self, id: &str) -> Result<Session, SessionError>;

    /// 关闭会话
    fn close(&self, id: &str) -> Result<(), SessionError>;

    /// 更新最后活动时间
    fn touch(&self, id: &str);

    /// 获取所有过期会话的 ID
    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String>;

    /// 当前会话数
    fn count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_idle_for_after_timeout() {
        let session = Session::new(UserId::from("u1"), UserRole::Author);
        let later = session.last_activity + chrono::Duration::seconds(61);

        assert!(session.is_idle_for(60, later));
        assert!(!session.is_idle_for(120, later));
    }

    #[test]
    fn test_huge_timeout_never_idles() {
        let session = Session::new(UserId::from("u1"), UserRole::Author);
        let later = session.last_activity + chrono::Duration::days(365 * 100);

        assert!(!session.is_idle_for(u64::MAX, later));
        assert!(!session.is_idle_for(i64::MAX as u64, later));
        assert!(idle_timeout(u64::MAX).is_none());
    }
}
