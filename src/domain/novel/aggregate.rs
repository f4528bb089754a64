//! Novel Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{next_timestamp, NovelId, NovelStatus, Title};
use crate::domain::user::UserId;

/// 小说的可编辑资料
///
/// 状态由调用方显式给出，不做默认值注入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovelProfile {
    pub title: Title,
    pub description: String,
    pub genre: String,
    pub status: NovelStatus,
    pub cover_url: String,
}

/// Novel 聚合根
///
/// 不变量:
/// - author_id 指向角色为 AUTHOR 的用户（由仓储在写入时校验）
/// - updated_at >= created_at
/// - 小说资料或任一章节变化时 updated_at 前进
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Novel {
    id: NovelId,
    author_id: UserId,
    profile: NovelProfile,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Novel {
    /// 创建新小说
    pub fn new(author_id: UserId, profile: NovelProfile) -> Self {
        let now = Utc::now();
        Self {
            id: NovelId::new(),
            author_id,
            profile,
            created_at: now,
            updated_at: now,
        }
    }

    /// 以已有数据重建（种子数据或外部持久化）
    pub fn restore(
        id: NovelId,
        author_id: UserId,
        profile: NovelProfile,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            profile,
            created_at,
            updated_at: updated_at.max(created_at),
        }
    }

    /// 覆盖可编辑资料
    pub fn revise(&mut self, profile: NovelProfile) {
        self.profile = profile;
        self.touch();
    }

    /// 推进更新时间（章节变化时级联调用）
    pub fn touch(&mut self) {
        self.updated_at = next_timestamp(self.updated_at);
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }

    // Getters
    pub fn id(&self) -> &NovelId {
        &self.id
    }

    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    pub fn profile(&self) -> &NovelProfile {
        &self.profile
    }

    pub fn title(&self) -> &Title {
        &self.profile.title
    }

    pub fn description(&self) -> &str {
        &self.profile.description
    }

    pub fn genre(&self) -> &str {
        &self.profile.genre
    }

    pub fn status(&self) -> NovelStatus {
        self.profile.status
    }

    pub fn cover_url(&self) -> &str {
        &self.profile.cover_url
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

    fn profile(title: &str) -> NovelProfile {
        NovelProfile {
            title: Title::new(title).unwrap(),
            description: String::new(),
            genre: "Fantasy".to_string(),
            status: NovelStatus::Hiatus,
            cover_url: String::new(),
        }
    }

    #[test]
    fn test_novel_creation() {
        let novel = Novel::new(UserId::from("u1"), profile("T"));

        assert_eq!(novel.title().as_str(), "T");
        assert_eq!(novel.created_at(), novel.updated_at());
        // 状态原样保留
        assert_eq!(novel.status(), NovelStatus::Hiatus);
        assert!(novel.is_authored_by(&UserId::from("u1")));
    }

    #[test]
    fn test_revise_advances_updated_at() {
        let mut novel = Novel::new(UserId::from("u1"), profile("T"));
        let before = novel.updated_at();

        novel.revise(profile("T2"));

        assert_eq!(novel.title().as_str(), "T2");
        assert!(novel.updated_at() > before);
        assert!(novel.updated_at() >= novel.created_at());
    }

    #[test]
    fn test_touch_advances_past_future_timestamp() {
        let future = Utc::now() + chrono::Duration::hours(1);
        let mut novel = Novel::restore(
            NovelId::from("n1"),
            UserId::from("u1"),
            profile("T"),
            future,
            future,
        );

        novel.touch();
        assert_eq!(novel.updated_at(), future + chrono::Duration::microseconds(1));

        novel.touch();
        assert_eq!(novel.updated_at(), future + chrono::Duration::microseconds(2));
    }

    #[test]
    fn test_restore_clamps_updated_at() {
        let now = Utc::now();
        let earlier = now - chrono::Duration::seconds(10);
        let novel = Novel::restore(NovelId::from("n1"), UserId::from("u1"), profile("T"), now, earlier);
        assert_eq!(novel.updated_at(), now);
    }
}
