//! HTTP handlers for the catalog API.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{CatalogQuery, CatalogResponse, HealthResponse, SearchQuery, SearchResponse};
use super::error::AppError;
use super::state::AppState;
use crate::db::catalog_checksum;
use crate::models::StarRecord;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Reports the service as degraded when the catalog cannot be read.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let healthy = matches!(state.repository.health_check().await, Ok(true));
    let star_count = if healthy {
        state.repository.count().await.ok()
    } else {
        None
    };

    Ok(Json(HealthResponse {
        status: if star_count.is_some() { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        star_count,
    }))
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /v1/stars
///
/// The whole catalog, or the stars within `max_distance_ly` when given. The
/// checksum always covers exactly the returned stars.
pub async fn list_stars(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> HandlerResult<CatalogResponse> {
    let stars = state.repository.load_catalog().await?;

    let (checksum, stars) = match query.max_distance_ly {
        None => (state.repository.catalog_checksum().await?, stars),
        Some(max) if max.is_finite() && max >= 0.0 => {
            let within: Vec<StarRecord> = stars
                .into_iter()
                .filter(|s| s.distance_ly <= max)
                .collect();
            (catalog_checksum(&within)?, within)
        }
        Some(max) => {
            return Err(AppError::BadRequest(format!(
                "max_distance_ly must be a non-negative number, got {}",
                max
            )))
        }
    };

    Ok(Json(CatalogResponse {
        checksum,
        count: stars.len(),
        stars,
    }))
}

/// GET /v1/stars/search?q=...
pub async fn search_stars(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> HandlerResult<SearchResponse> {
    let results = state.repository.search(&query.q).await?;
    Ok(Json(SearchResponse {
        query: query.q,
        results,
    }))
}

/// GET /v1/stars/{name}
pub async fn get_star(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult<StarRecord> {
    let star = state.repository.find_star(&name).await?;
    Ok(Json(star))
}
