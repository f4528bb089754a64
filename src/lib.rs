//! Novella - 小说阅读与写作平台后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 小说与两层章节
//! - User Context: 用户与角色
//! - 章节层级解析：分组、排序、阅读顺序
//!
//! 应用层 (application/):
//! - Ports: LibraryStore, TextGeneration, SessionManager
//! - Commands / Queries: CQRS 处理器
//! - LibraryService: 对外门面
//!
//! 基础设施层 (infrastructure/):
//! - Memory: 内存存储、会话管理、演示数据
//! - Adapters: Gemini 客户端、离线生成器
//! - HTTP: JSON API

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
