//! 调用方能力检查
//!
//! 写操作前确认调用方身份与作者归属

use crate::application::error::ApplicationError;
use crate::application::ports::LibraryStorePort;
use crate::domain::novel::{Novel, NovelId};
use crate::domain::user::{User, UserId};

/// 加载调用方用户
pub(super) async fn load_caller(
    store: &dyn LibraryStorePort,
    caller: &UserId,
) -> Result<User, ApplicationError> {
    store
        .get_user(caller)
        .await?
        .ok_or_else(|| ApplicationError::Unauthenticated(format!("unknown user: {}", caller)))
}

/// 加载小说并确认调用方是其作者
pub(super) async fn load_owned_novel(
    store: &dyn LibraryStorePort,
    caller: &UserId,
    novel_id: &NovelId,
) -> Result<Novel, ApplicationError> {
    let user = load_caller(store, caller).await?;
    let novel = store
        .get_novel(novel_id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("Novel", novel_id))?;

    if !user.role().can_write() || !novel.is_authored_by(user.id()) {
        return Err(ApplicationError::permission_denied(format!(
            "user {} is not the author of novel {}",
            user.id(),
            novel_id
        )));
    }

    Ok(novel)
}
