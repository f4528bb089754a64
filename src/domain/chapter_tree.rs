//! 章节层级解析器
//!
//! 输入一本小说的扁平章节列表，计算：
//! - 顶层章节与子章节的分组（树，最多两层）
//! - 用于"上一章/下一章"导航的扁平阅读顺序
//!
//! 排序规则：同级按 order_index 升序，相同时按 created_at 升序，
//! 再相同时保持输入顺序（稳定排序）。

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::novel::{Chapter, ChapterId};

/// 阅读顺序策略
///
/// `InsertionOrder` 对扁平列表整体排序，导航时忽略层级；
/// `TreeOrder` 按树遍历：顶层章节后紧跟其子章节，再到下一个顶层章节。
/// 两者在存在子章节时结果不同，由调用方选择。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingOrder {
    #[default]
    InsertionOrder,
    TreeOrder,
}

/// 顶层章节及其子章节
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterNode {
    pub chapter: Chapter,
    pub children: Vec<Chapter>,
}

/// 章节树
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ChapterTree {
    roots: Vec<ChapterNode>,
}

/// 某章节在阅读顺序中的前后章节
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterNeighbors {
    pub previous: Option<Chapter>,
    pub next: Option<Chapter>,
}

/// 同级排序（稳定）
pub fn sort_siblings(chapters: &mut [Chapter]) {
    chapters.sort_by(|a, b| {
        a.order_index()
            .cmp(&b.order_index())
            .then_with(|| a.created_at().cmp(&b.created_at()))
    });
}

impl ChapterTree {
    /// 排序并分组
    pub fn build(mut chapters: Vec<Chapter>) -> Self {
        sort_siblings(&mut chapters);
        Self::group(chapters)
    }

    /// 按 parent_id 分组，保持输入中的相对顺序
    ///
    /// 父章节不在输入中、或父章节本身是子章节的，提升为顶层章节。
    pub fn group(chapters: Vec<Chapter>) -> Self {
        let ids: HashSet<ChapterId> = chapters.iter().map(|c| c.id().clone()).collect();
        let nested: HashSet<ChapterId> = chapters
            .iter()
            .filter(|c| !c.is_root())
            .map(|c| c.id().clone())
            .collect();

        let mut roots = Vec::new();
        let mut children: HashMap<ChapterId, Vec<Chapter>> = HashMap::new();

        for chapter in chapters {
            match chapter.parent_id() {
                None => roots.push(chapter),
                Some(parent) if ids.contains(parent) && !nested.contains(parent) => {
                    children.entry(parent.clone()).or_default().push(chapter);
                }
                Some(parent) => {
                    tracing::warn!(
                        chapter_id = %chapter.id(),
                        parent_id = %parent,
                        "Orphan chapter flattened to root level"
                    );
                    roots.push(chapter);
                }
            }
        }

        let roots = roots
            .into_iter()
            .map(|chapter| {
                let children = children.remove(chapter.id()).unwrap_or_default();
                ChapterNode { chapter, children }
            })
            .collect();

        Self { roots }
    }

    pub fn roots(&self) -> &[ChapterNode] {
        &self.roots
    }

    /// 章节总数
    pub fn len(&self) -> usize {
        self.roots.iter().map(|node| 1 + node.children.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// 树遍历顺序的扁平序列
    pub fn into_sequence(self) -> Vec<Chapter> {
        let mut sequence = Vec::with_capacity(self.len());
        for node in self.roots {
            sequence.push(node.chapter);
            sequence.extend(node.children);
        }
        sequence
    }
}

/// 按策略计算阅读顺序
pub fn reading_sequence(mut chapters: Vec<Chapter>, order: ReadingOrder) -> Vec<Chapter> {
    match order {
        ReadingOrder::InsertionOrder => {
            sort_siblings(&mut chapters);
            chapters
        }
        ReadingOrder::TreeOrder => ChapterTree::build(chapters).into_sequence(),
    }
}

/// 在阅读序列中查找前后章节，章节不在序列中时返回 None
pub fn neighbors(sequence: &[Chapter], chapter_id: &ChapterId) -> Option<ChapterNeighbors> {
    let position = sequence.iter().position(|c| c.id() == chapter_id)?;
    let previous = position
        .checked_sub(1)
        .and_then(|index| sequence.get(index))
        .cloned();
    let next = sequence.get(position + 1).cloned();
    Some(ChapterNeighbors { previous, next })
}
