//! In-Memory Session Manager Implementation

use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{Session, SessionError, SessionManagerPort};

/// 内存会话管理器
pub struct InMemorySessionManager {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionManager {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 关闭所有空闲超时的会话，返回关闭数量
    pub fn sweep_expired(&self, idle_timeout_secs: u64) -> usize {
        self.get_expired_sessions(idle_timeout_secs)
            .iter()
            .filter(|id| self.sessions.remove(id.as_str()).is_some())
            .count()
    }
}

impl Default for InMemorySessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManagerPort for InMemorySessionManager {
    fn create(&self, session: Session) -> Result<String, SessionError> {
        let session_id = session.id.clone();
        if self.sessions.contains_key(&session_id) {
            return Err(SessionError::AlreadyExists(session_id));
        }
        let user_id = session.user_id.clone();
        self.sessions.insert(session_id.clone(), session);
        tracing::info!(user_id = %user_id, "Session created");
        Ok(session_id)
    }

    fn get(&self, id: &str) -> Result<Session, SessionError> {
        self.sessions
            .get(id)
            .map(|s| s.clone())
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    fn close(&self, id: &str) -> Result<(), SessionError> {
        self.sessions
            .remove(id)
            .map(|(_, session)| {
                tracing::info!(user_id = %session.user_id, "Session closed");
            })
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    fn touch(&self, id: &str) {
        if let Some(mut session) = self.sessions.get_mut(id) {
            session.last_activity = Utc::now();
        }
    }

    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String> {
        let now = Utc::now();

        self.sessions
            .iter()
            .filter(|entry| entry.is_idle_for(idle_timeout_secs, now))
            .map(|entry| entry.key().clone())
            .collect()
    }

    fn count(&self) -> usize {
        self.sessions.len()
    }
}
