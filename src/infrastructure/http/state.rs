//! Application State
//!
//! 所有 HTTP handler 共享的状态，只持有应用层门面

use crate::application::LibraryService;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub service: LibraryService,
}

impl AppState {
    pub fn new(service: LibraryService) -> Self {
        Self { service }
    }
}
