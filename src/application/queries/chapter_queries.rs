//! Chapter Queries

use crate::domain::novel::{ChapterId, NovelId};
use crate::domain::ReadingOrder;

/// 获取章节查询
#[derive(Debug, Clone)]
pub struct GetChapter {
    pub chapter_id: ChapterId,
}

/// 列出小说章节（扁平，按同级顺序排序）
#[derive(Debug, Clone)]
pub struct ListChapters {
    pub novel_id: NovelId,
}

/// 获取小说章节树
#[derive(Debug, Clone)]
pub struct GetChapterTree {
    pub novel_id: NovelId,
}

/// 获取上一章/下一章
#[derive(Debug, Clone)]
pub struct GetChapterNeighbors {
    pub novel_id: NovelId,
    pub chapter_id: ChapterId,
    pub order: ReadingOrder,
}
