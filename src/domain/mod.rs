//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Novel Context: 小说与章节
//! - User Context: 用户与角色
//!
//! 共享的章节层级解析器负责分组、排序和阅读顺序

pub mod novel;
pub mod user;

mod chapter_tree;

pub use chapter_tree::{
    neighbors, reading_sequence, sort_siblings, ChapterNeighbors, ChapterNode, ChapterTree,
    ReadingOrder,
};
