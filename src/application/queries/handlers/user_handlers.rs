//! User Query Handlers

use std::sync::Arc;

use chrono::Utc;

use crate::application::error::ApplicationError;
use crate::application::ports::{LibraryStorePort, SessionError, SessionManagerPort};
use crate::application::queries::{GetSessionUser, GetUser};
use crate::domain::user::User;

/// GetUser Handler
pub struct GetUserHandler {
    store: Arc<dyn LibraryStorePort>,
}

impl GetUserHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetUser) -> Result<User, ApplicationError> {
        self.store
            .get_user(&query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", &query.user_id))
    }
}

/// GetSessionUser Handler - 解析会话令牌
///
/// 空闲超时的会话立即关闭并视为未登录
pub struct GetSessionUserHandler {
    store: Arc<dyn LibraryStorePort>,
    sessions: Arc<dyn SessionManagerPort>,
    idle_timeout_secs: u64,
}

impl GetSessionUserHandler {
    pub fn new(
        store: Arc<dyn LibraryStorePort>,
        sessions: Arc<dyn SessionManagerPort>,
        idle_timeout_secs: u64,
    ) -> Self {
        Self {
            store,
            sessions,
            idle_timeout_secs,
        }
    }

    pub async fn handle(&self, query: GetSessionUser) -> Result<User, ApplicationError> {
        let session = self.sessions.get(&query.session_id)?;

        if session.is_idle_for(self.idle_timeout_secs, Utc::now()) {
            match self.sessions.close(&session.id) {
                // 并发登出
                Ok(()) | Err(SessionError::NotFound(_)) => {}
                Err(err) => {
                    tracing::warn!(user_id = %session.user_id, error = %err, "Failed to close expired session");
                    return Err(err.into());
                }
            }
            tracing::debug!(user_id = %session.user_id, "Session expired on access");
            return Err(SessionError::Expired(session.id).into());
        }
        self.sessions.touch(&session.id);

        self.store
            .get_user(&session.user_id)
            .await?
            .ok_or_else(|| ApplicationError::Unauthenticated(format!("unknown user: {}", session.user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::Session;
    use crate::domain::user::{UserId, UserRole};
    use crate::infrastructure::memory::{demo_library, InMemoryLibraryStore};

    /// 会话已空闲，close 返回预设结果
    struct StaleSessions {
        session: Session,
        close_error: fn(String) -> SessionError,
    }

    impl StaleSessions {
        fn new(close_error: fn(String) -> SessionError) -> Self {
            let mut session = Session::new(UserId::from("u1"), UserRole::Author);
            session.last_activity = Utc::now() - chrono::Duration::seconds(120);
            Self {
                session,
                close_error,
            }
        }
    }

    impl SessionManagerPort for StaleSessions {
        fn create(&self, session: Session) -> Result<String, SessionError> {
            Ok(session.id)
        }

        fn get(&self, _id: &str) -> Result<Session, SessionError> {
            Ok(self.session.clone())
        }

        fn close(&self, id: &str) -> Result<(), SessionError> {
            Err((self.close_error)(id.to_string()))
        }

        fn touch(&self, _id: &str) {}

        fn get_expired_sessions(&self, _idle_timeout_secs: u64) -> Vec<String> {
            Vec::new()
        }

        fn count(&self) -> usize {
            1
        }
    }

    fn handler(sessions: StaleSessions) -> (GetSessionUserHandler, String) {
        let id = sessions.session.id.clone();
        let store = Arc::new(InMemoryLibraryStore::from_seed(demo_library().unwrap(), None));
        (GetSessionUserHandler::new(store, Arc::new(sessions), 60), id)
    }

    #[tokio::test]
    async fn test_expired_session_already_closed_reports_expired() {
        let (handler, id) = handler(StaleSessions::new(SessionError::NotFound));

        let err = handler.handle(GetSessionUser { session_id: id }).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Unauthenticated(ref msg) if msg.contains("expired")));
    }

    #[tokio::test]
    async fn test_close_failure_on_expired_session_is_surfaced() {
        let (handler, id) = handler(StaleSessions::new(SessionError::AlreadyExists));

        let err = handler.handle(GetSessionUser { session_id: id }).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Unauthenticated(ref msg) if msg.contains("already exists")));
    }
}
