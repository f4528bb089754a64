//! Novel Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{next_timestamp, ChapterId, NovelId, Title};

/// 章节的可写字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterFields {
    /// 父章节（为空表示顶层章节）
    pub parent_id: Option<ChapterId>,
    pub title: Title,
    pub content: String,
    /// 同级排序序号
    pub order_index: i32,
    pub is_published: bool,
}

/// 章节 - 小说的一个片段
///
/// 不变量:
/// - parent_id 指向同一小说中的顶层章节（层级最多两层）
/// - 同级之间按 order_index 排序，相同时按创建顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    id: ChapterId,
    novel_id: NovelId,
    fields: ChapterFields,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Chapter {
    pub fn new(novel_id: NovelId, fields: ChapterFields) -> Self {
        let now = Utc::now();
        Self {
            id: ChapterId::new(),
            novel_id,
            fields,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn restore(
        id: ChapterId,
        novel_id: NovelId,
        fields: ChapterFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            novel_id,
            fields,
            created_at,
            updated_at: updated_at.max(created_at),
        }
    }

    /// 覆盖可写字段并推进更新时间
    pub fn apply(&mut self, fields: ChapterFields) {
        self.fields = fields;
        self.updated_at = next_timestamp(self.updated_at);
    }

    pub fn id(&self) -> &ChapterId {
        &self.id
    }

    pub fn novel_id(&self) -> &NovelId {
        &self.novel_id
    }

    pub fn parent_id(&self) -> Option<&ChapterId> {
        self.fields.parent_id.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.fields.parent_id.is_none()
    }

    pub fn fields(&self) -> &ChapterFields {
        &self.fields
    }

    pub fn title(&self) -> &Title {
        &self.fields.title
    }

    pub fn content(&self) -> &str {
        &self.fields.content
    }

    pub fn order_index(&self) -> i32 {
        self.fields.order_index
    }

    pub fn is_published(&self) -> bool {
        self.fields.is_published
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_identity_and_created_at() {
        let fields = ChapterFields {
            parent_id: None,
            title: Title::new("C1").unwrap(),
            content: "草稿".to_string(),
            order_index: 0,
            is_published: false,
        };
        let mut chapter = Chapter::new(NovelId::from("n1"), fields.clone());
        let id = chapter.id().clone();
        let created = chapter.created_at();

        chapter.apply(ChapterFields {
            content: "定稿".to_string(),
            is_published: true,
            ..fields
        });

        assert_eq!(chapter.id(), &id);
        assert_eq!(chapter.created_at(), created);
        assert_eq!(chapter.content(), "定稿");
        assert!(chapter.is_published());
        assert!(chapter.updated_at() > created);
    }
}
