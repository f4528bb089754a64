//! Novel Commands

use crate::domain::novel::{NovelId, NovelStatus};
use crate::domain::user::UserId;

/// 创建小说命令
///
/// 调用方必须是 AUTHOR，且只能以自己为作者
#[derive(Debug, Clone)]
pub struct CreateNovel {
    pub caller: UserId,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub status: NovelStatus,
    pub cover_url: String,
}

/// 更新小说资料命令
#[derive(Debug, Clone)]
pub struct UpdateNovel {
    pub caller: UserId,
    pub novel_id: NovelId,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub status: NovelStatus,
    pub cover_url: String,
}
