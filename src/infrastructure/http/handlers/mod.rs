//! HTTP Handlers

mod ai;
mod auth;
mod chapter;
mod novel;
mod ping;

pub use ai::*;
pub use auth::*;
pub use chapter::*;
pub use novel::*;
pub use ping::*;
