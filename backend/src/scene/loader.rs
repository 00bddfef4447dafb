//! One-shot catalog fetch at scene startup.
//!
//! A failed fetch is logged and leaves the scene empty; there is no retry.

use std::sync::Arc;
use tokio::task::JoinHandle;

use super::command::{SceneCommand, SceneHandle};
use crate::db::CatalogRepository;

/// Fetch the catalog and queue it for the frame loop.
///
/// Returns the number of stars delivered, or `None` when the fetch failed.
pub async fn load_catalog(repository: &dyn CatalogRepository, handle: &SceneHandle) -> Option<usize> {
    match repository.load_catalog().await {
        Ok(records) => {
            let count = records.len();
            if !handle.send(SceneCommand::CatalogLoaded(records)) {
                log::warn!("Catalog loaded but the frame loop is gone");
                return None;
            }
            log::info!("Catalog loaded: {} stars", count);
            Some(count)
        }
        Err(e) => {
            log::error!("Failed to load star catalog: {}", e);
            None
        }
    }
}

/// Run [`load_catalog`] on the tokio runtime.
pub fn spawn_catalog_load(
    repository: Arc<dyn CatalogRepository>,
    handle: SceneHandle,
) -> JoinHandle<Option<usize>> {
    tokio::spawn(async move { load_catalog(repository.as_ref(), &handle).await })
}
