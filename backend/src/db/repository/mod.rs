//! Catalog repository trait.

pub mod error;

use async_trait::async_trait;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::StarRecord;
use crate::services::search::search_stars;

/// Storage backend for the star catalog.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across request handlers.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Check that the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// The full catalog, sorted by distance.
    async fn load_catalog(&self) -> RepositoryResult<Vec<StarRecord>>;

    /// SHA-256 checksum of the current catalog.
    async fn catalog_checksum(&self) -> RepositoryResult<String>;

    /// Replace the catalog, returning the new checksum.
    ///
    /// # Errors
    /// `ValidationError` if any record is malformed; the stored catalog is
    /// left untouched in that case.
    async fn replace_catalog(&self, records: Vec<StarRecord>) -> RepositoryResult<String>;

    /// Number of stars in the catalog.
    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.load_catalog().await?.len())
    }

    /// Star with the given name (case-insensitive).
    async fn find_star(&self, name: &str) -> RepositoryResult<StarRecord> {
        self.load_catalog()
            .await?
            .into_iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("No star named '{}'", name),
                    ErrorContext::new("find_star")
                        .with_entity("star")
                        .with_entity_id(name),
                )
            })
    }

    /// Name search, see [`search_stars`].
    async fn search(&self, query: &str) -> RepositoryResult<Vec<StarRecord>> {
        let records = self.load_catalog().await?;
        Ok(search_stars(&records, query).into_iter().cloned().collect())
    }
}

/// Check catalog records before they are stored.
///
/// Every record needs a name, a finite positive `distance_ly` and at least one
/// component.
pub fn validate_catalog(records: &[StarRecord]) -> RepositoryResult<()> {
    for (index, record) in records.iter().enumerate() {
        let problem = if record.name.trim().is_empty() {
            Some("empty name")
        } else if !(record.distance_ly.is_finite() && record.distance_ly > 0.0) {
            Some("distance_ly must be a positive number")
        } else if record.components.is_empty() {
            Some("at least one component is required")
        } else {
            None
        };

        if let Some(problem) = problem {
            return Err(RepositoryError::validation_with_context(
                problem,
                ErrorContext::new("validate_catalog")
                    .with_entity("star")
                    .with_entity_id(if record.name.is_empty() {
                        format!("#{}", index)
                    } else {
                        record.name.clone()
                    }),
            ));
        }
    }
    Ok(())
}
