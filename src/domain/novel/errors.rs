//! Novel Context - Errors

use thiserror::Error;

use super::{ChapterId, NovelId};
use crate::domain::user::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NovelError {
    #[error("无效的标题: {0}")]
    InvalidTitle(String),

    #[error("作者不存在: {0}")]
    UnknownAuthor(UserId),

    #[error("用户 {0} 不是作者")]
    NotAnAuthor(UserId),

    #[error("章节不能以自身为父章节: {0}")]
    SelfParent(ChapterId),

    #[error("父章节不存在: {0}")]
    ParentNotFound(ChapterId),

    #[error("父章节 {parent} 不属于小说 {novel}")]
    ParentInOtherNovel { parent: ChapterId, novel: NovelId },

    #[error("父章节 {0} 本身是子章节，层级最多两层")]
    ParentIsNested(ChapterId),

    #[error("章节 {0} 已有子章节，不能挂到其他章节下")]
    HasChildren(ChapterId),

    #[error("章节 {0} 不能移动到其他小说")]
    NovelMismatch(ChapterId),
}
