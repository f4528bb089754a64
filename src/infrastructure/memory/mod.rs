//! Memory Layer - In-Memory State Management
//!
//! 用户、小说、章节的内存存储，以及登录会话管理

mod library_store;
mod seed;
mod session_manager;

pub use library_store::InMemoryLibraryStore;
pub use seed::{demo_library, LibrarySeed};
pub use session_manager::InMemorySessionManager;
