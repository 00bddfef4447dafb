//! Catalog checksums.

use sha2::{Digest, Sha256};

use super::repository::RepositoryResult;
use crate::models::StarRecord;

/// SHA-256 of `content` as a hex string.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checksum of a catalog's compact JSON serialization.
///
/// Independent of how the catalog file happens to be formatted on disk.
pub fn catalog_checksum(records: &[StarRecord]) -> RepositoryResult<String> {
    let json = serde_json::to_string(records)?;
    Ok(calculate_checksum(&json))
}
