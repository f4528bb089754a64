//! Novel Queries

use crate::domain::novel::NovelId;
use crate::domain::user::UserId;

/// 获取小说详情查询
#[derive(Debug, Clone)]
pub struct GetNovel {
    pub novel_id: NovelId,
}

/// 列出所有小说查询（最近更新的在前）
#[derive(Debug, Clone)]
pub struct ListNovels;

/// 列出某作者的小说查询
#[derive(Debug, Clone)]
pub struct ListNovelsByAuthor {
    pub author_id: UserId,
}
