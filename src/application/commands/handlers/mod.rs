//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod access;
mod auth_handlers;
mod chapter_handlers;
mod generation_handlers;
mod novel_handlers;

pub use auth_handlers::*;
pub use chapter_handlers::*;
pub use generation_handlers::*;
pub use novel_handlers::*;
