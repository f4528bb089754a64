//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod library_store;
mod session_manager;
mod text_generation;

pub use library_store::{ChapterWrite, LibraryStorePort, StoreError};
pub use session_manager::{idle_timeout, Session, SessionError, SessionManagerPort};
pub use text_generation::{usable_text, GenerationError, TextGenerationPort};
