//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 小说聚合管理
//! - 章节实体（最多两层）
//! - 章节位置校验

mod aggregate;
mod entities;
mod errors;
mod rules;
mod value_objects;

pub use aggregate::{Novel, NovelProfile};
pub use entities::{Chapter, ChapterFields};
pub use errors::NovelError;
pub use rules::{ensure_author, validate_placement};
pub use value_objects::{ChapterId, NovelId, NovelStatus, Title};

use chrono::{DateTime, Utc};

/// 计算下一个更新时间戳，严格晚于上一次
///
/// 时钟未前进或回拨时，在上一次基础上加 1 微秒
pub(crate) fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous + chrono::Duration::microseconds(1))
}
