//! Chapter Commands

use crate::domain::novel::{ChapterId, NovelId};
use crate::domain::user::UserId;

/// 保存章节命令（新建或更新）
#[derive(Debug, Clone)]
pub struct SaveChapter {
    pub caller: UserId,
    /// 为空时新建
    pub chapter_id: Option<ChapterId>,
    pub novel_id: NovelId,
    pub parent_id: Option<ChapterId>,
    pub title: String,
    pub content: String,
    pub order_index: i32,
    pub is_published: bool,
}

/// 删除章节命令（子章节一并删除）
#[derive(Debug, Clone)]
pub struct DeleteChapter {
    pub caller: UserId,
    pub chapter_id: ChapterId,
}
