//! Generation Commands
//!
//! 文本生成与持久化相互独立：这些命令只读取存储，从不写入

use crate::domain::novel::{ChapterId, NovelId};

/// 生成小说简介
#[derive(Debug, Clone)]
pub struct GenerateSynopsis {
    pub title: String,
    pub genre: String,
}

/// 续写编辑中的草稿
#[derive(Debug, Clone)]
pub struct ContinueDraft {
    pub novel_id: NovelId,
}

/// 生成章节摘要
#[derive(Debug, Clone)]
pub struct SummarizeChapter {
    pub chapter_id: ChapterId,
}
