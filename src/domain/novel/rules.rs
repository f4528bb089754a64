//! Novel Context - 写入规则
//!
//! 章节层级和作者身份的校验，仓储在修改状态之前调用

use super::{Chapter, ChapterId, NovelError, NovelId};
use crate::domain::user::{User, UserId};

/// 校验小说作者：必须存在且角色为 AUTHOR
pub fn ensure_author(author_id: &UserId, author: Option<&User>) -> Result<(), NovelError> {
    match author {
        None => Err(NovelError::UnknownAuthor(author_id.clone())),
        Some(user) if !user.role().can_write() => {
            Err(NovelError::NotAnAuthor(author_id.clone()))
        }
        Some(_) => Ok(()),
    }
}

/// 校验章节在层级中的位置
///
/// - `existing`: 待更新的已存章节，新建时为 None
/// - `parent_id`: 写入后的父章节
/// - `find`: 按 ID 查找任意已存章节
/// - `has_children`: 判断某章节是否已有子章节
///
/// 层级最多两层：父章节必须是同一小说的顶层章节，
/// 已有子章节的章节不能再挂到其他章节下。
pub fn validate_placement<'a, F, H>(
    novel_id: &NovelId,
    existing: Option<&Chapter>,
    parent_id: Option<&ChapterId>,
    find: F,
    has_children: H,
) -> Result<(), NovelError>
where
    F: Fn(&ChapterId) -> Option<&'a Chapter>,
    H: Fn(&ChapterId) -> bool,
{
    if let Some(chapter) = existing {
        if chapter.novel_id() != novel_id {
            return Err(NovelError::NovelMismatch(chapter.id().clone()));
        }
    }

    let Some(parent_id) = parent_id else {
        return Ok(());
    };

    if existing.is_some_and(|chapter| chapter.id() == parent_id) {
        return Err(NovelError::SelfParent(parent_id.clone()));
    }

    let parent = find(parent_id).ok_or_else(|| NovelError::ParentNotFound(parent_id.clone()))?;

    if parent.novel_id() != novel_id {
        return Err(NovelError::ParentInOtherNovel {
            parent: parent_id.clone(),
            novel: novel_id.clone(),
        });
    }

    if parent.parent_id().is_some() {
        return Err(NovelError::ParentIsNested(parent_id.clone()));
    }

    if let Some(chapter) = existing {
        if has_children(chapter.id()) {
            return Err(NovelError::HasChildren(chapter.id().clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::novel::{ChapterFields, Title};
    use crate::domain::user::UserRole;

    fn chapter(id: &str, novel: &str, parent: Option<&str>) -> Chapter {
        let now = chrono::Utc::now();
        Chapter::restore(
            ChapterId::from(id),
            NovelId::from(novel),
            ChapterFields {
                parent_id: parent.map(ChapterId::from),
                title: Title::new(id).unwrap(),
                content: String::new(),
                order_index: 0,
                is_published: true,
            },
            now,
            now,
        )
    }

    fn check(
        chapters: &[Chapter],
        novel: &str,
        existing: Option<&str>,
        parent: Option<&str>,
    ) -> Result<(), NovelError> {
        let find = |id: &ChapterId| chapters.iter().find(|c| c.id() == id);
        let existing = existing.and_then(|id| find(&ChapterId::from(id)));
        validate_placement(
            &NovelId::from(novel),
            existing,
            parent.map(ChapterId::from).as_ref(),
            find,
            |id| chapters.iter().any(|c| c.parent_id() == Some(id)),
        )
    }

    fn library() -> Vec<Chapter> {
        vec![
            chapter("c1", "n1", None),
            chapter("c2", "n1", None),
            chapter("c2-1", "n1", Some("c2")),
            chapter("x1", "n2", None),
        ]
    }

    #[test]
    fn test_root_and_child_placements_pass() {
        let chapters = library();
        assert!(check(&chapters, "n1", None, None).is_ok());
        assert!(check(&chapters, "n1", None, Some("c1")).is_ok());
        // 子章节换到另一个顶层章节下
        assert!(check(&chapters, "n1", Some("c2-1"), Some("c1")).is_ok());
    }

    #[test]
    fn test_nested_parent_rejected() {
        let chapters = library();
        assert_eq!(
            check(&chapters, "n1", None, Some("c2-1")),
            Err(NovelError::ParentIsNested(ChapterId::from("c2-1")))
        );
    }

    #[test]
    fn test_parent_from_other_novel_rejected() {
        let chapters = library();
        assert!(matches!(
            check(&chapters, "n1", None, Some("x1")),
            Err(NovelError::ParentInOtherNovel { .. })
        ));
    }

    #[test]
    fn test_missing_parent_rejected() {
        let chapters = library();
        assert_eq!(
            check(&chapters, "n1", None, Some("ghost")),
            Err(NovelError::ParentNotFound(ChapterId::from("ghost")))
        );
    }

    #[test]
    fn test_self_parent_rejected() {
        let chapters = library();
        assert_eq!(
            check(&chapters, "n1", Some("c1"), Some("c1")),
            Err(NovelError::SelfParent(ChapterId::from("c1")))
        );
    }

    #[test]
    fn test_chapter_with_children_cannot_be_nested() {
        let chapters = library();
        assert_eq!(
            check(&chapters, "n1", Some("c2"), Some("c1")),
            Err(NovelError::HasChildren(ChapterId::from("c2")))
        );
    }

    #[test]
    fn test_moving_across_novels_rejected() {
        let chapters = library();
        assert_eq!(
            check(&chapters, "n2", Some("c1"), None),
            Err(NovelError::NovelMismatch(ChapterId::from("c1")))
        );
    }

    #[test]
    fn test_ensure_author() {
        let author = User::new(UserId::from("u1"), "DemoAuthor", "a@x", UserRole::Author);
        let reader = User::new(UserId::from("u2"), "BookWorm", "r@x", UserRole::Reader);

        assert!(ensure_author(author.id(), Some(&author)).is_ok());
        assert_eq!(
            ensure_author(reader.id(), Some(&reader)),
            Err(NovelError::NotAnAuthor(UserId::from("u2")))
        );
        assert_eq!(
            ensure_author(&UserId::from("u9"), None),
            Err(NovelError::UnknownAuthor(UserId::from("u9")))
        );
    }
}
