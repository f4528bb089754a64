//! 章节编辑草稿
//!
//! 编辑器中尚未保存的内容。续写只在生成成功后追加，
//! 失败时草稿保持原样。

use crate::application::commands::SaveChapter;
use crate::domain::novel::{Chapter, ChapterId, NovelId};
use crate::domain::user::UserId;

/// 编辑中的章节草稿
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDraft {
    /// 已保存章节的 ID，新草稿为空
    pub chapter_id: Option<ChapterId>,
    pub novel_id: NovelId,
    pub parent_id: Option<ChapterId>,
    pub title: String,
    pub content: String,
    pub order_index: i32,
    pub is_published: bool,
}

impl ChapterDraft {
    /// 新建空白草稿
    pub fn new(novel_id: NovelId) -> Self {
        Self {
            chapter_id: None,
            novel_id,
            parent_id: None,
            title: String::new(),
            content: String::new(),
            order_index: 0,
            is_published: true,
        }
    }

    /// 新建某顶层章节下的子章节草稿
    pub fn sub_chapter(novel_id: NovelId, parent_id: ChapterId) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new(novel_id)
        }
    }

    /// 从已保存章节打开草稿
    pub fn from_chapter(chapter: &Chapter) -> Self {
        Self {
            chapter_id: Some(chapter.id().clone()),
            novel_id: chapter.novel_id().clone(),
            parent_id: chapter.parent_id().cloned(),
            title: chapter.title().to_string(),
            content: chapter.content().to_string(),
            order_index: chapter.order_index(),
            is_published: chapter.is_published(),
        }
    }

    /// 追加续写内容，已有正文时以空行分隔
    pub fn append_continuation(&mut self, continuation: &str) {
        if !self.content.is_empty() {
            self.content.push_str("\n\n");
        }
        self.content.push_str(continuation);
    }

    /// 转为保存命令
    pub fn to_command(&self, caller: UserId) -> SaveChapter {
        SaveChapter {
            caller,
            chapter_id: self.chapter_id.clone(),
            novel_id: self.novel_id.clone(),
            parent_id: self.parent_id.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            order_index: self.order_index,
            is_published: self.is_published,
        }
    }
}
