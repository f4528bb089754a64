//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（LibraryStore、TextGeneration、SessionManager）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - service: 对外门面
//! - error: 应用层错误定义

pub mod commands;
pub mod draft;
pub mod error;
pub mod ports;
pub mod queries;
pub mod service;

// Re-exports
pub use commands::{
    handlers::LoginResponse, ContinueDraft, CreateNovel, DeleteChapter, GenerateSynopsis, Login,
    Logout, SaveChapter, SummarizeChapter, UpdateNovel,
};

pub use draft::ChapterDraft;
pub use error::ApplicationError;

pub use ports::{
    usable_text, ChapterWrite, GenerationError, LibraryStorePort, Session, SessionError,
    SessionManagerPort, StoreError, TextGenerationPort,
};

pub use queries::{
    GetChapter, GetChapterNeighbors, GetChapterTree, GetNovel, GetSessionUser, GetUser,
    ListChapters, ListNovels, ListNovelsByAuthor,
};

pub use service::LibraryService;
