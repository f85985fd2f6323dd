//! Shared server state.
//!
//! DESIGN
//! ======
//! The content document is parsed once at startup and never mutated, so the
//! state is a cheap `Arc` clone per request.

use std::sync::Arc;

use site::content::Content;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<Content>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(content: Content, config: ServerConfig) -> Self {
        Self { content: Arc::new(content), config: Arc::new(config) }
    }
}
