//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::models::StarRecord;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" when the catalog is readable, "degraded" otherwise
    pub status: String,
    pub version: String,
    /// Stars in the catalog, absent when it could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_count: Option<usize>,
}

/// Full catalog with its checksum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub checksum: String,
    pub count: usize,
    pub stars: Vec<StarRecord>,
}

/// Query parameters for `GET /v1/stars`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Only stars at or within this distance
    #[serde(default)]
    pub max_distance_ly: Option<f64>,
}

/// Query parameters for `GET /v1/stars/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search results in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<StarRecord>,
}
