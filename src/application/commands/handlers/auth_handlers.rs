//! Auth Command Handlers
//!
//! 模拟登录：按角色选取演示用户，没有真实凭证

use std::sync::Arc;

use crate::application::commands::{Login, Logout};
use crate::application::error::ApplicationError;
use crate::application::ports::{LibraryStorePort, Session, SessionManagerPort};
use crate::domain::user::User;

/// 登录响应
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub session_id: String,
    pub user: User,
}

/// Login Handler
pub struct LoginHandler {
    store: Arc<dyn LibraryStorePort>,
    sessions: Arc<dyn SessionManagerPort>,
}

impl LoginHandler {
    pub fn new(store: Arc<dyn LibraryStorePort>, sessions: Arc<dyn SessionManagerPort>) -> Self {
        Self { store, sessions }
    }

    pub async fn handle(&self, command: Login) -> Result<LoginResponse, ApplicationError> {
        let user = self
            .store
            .list_users()
            .await?
            .into_iter()
            .find(|user| user.role() == command.role)
            .ok_or_else(|| ApplicationError::not_found("User with role", command.role))?;

        let session = Session::new(user.id().clone(), user.role());
        let session_id = self.sessions.create(session)?;

        tracing::info!(
            user_id = %user.id(),
            role = %user.role(),
            "User logged in"
        );

        Ok(LoginResponse { session_id, user })
    }
}

/// Logout Handler
pub struct LogoutHandler {
    sessions: Arc<dyn SessionManagerPort>,
}

impl LogoutHandler {
    pub fn new(sessions: Arc<dyn SessionManagerPort>) -> Self {
        Self { sessions }
    }

    pub fn handle(&self, command: Logout) -> Result<(), ApplicationError> {
        self.sessions.close(&command.session_id)?;
        Ok(())
    }
}
