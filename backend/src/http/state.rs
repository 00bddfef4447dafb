//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::CatalogRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog storage backend
    pub repository: Arc<dyn CatalogRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }
}
