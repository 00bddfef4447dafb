//! Router configuration for the HTTP API.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The catalog is public and read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/stars", get(handlers::list_stars))
        .route("/stars/search", get(handlers::search_stars))
        .route("/stars/{name}", get(handlers::get_star));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{LocalRepository, RepositoryFactory};
    use crate::models::{StarComponent, StarRecord};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let sirius = StarRecord {
            name: "Sirius".to_string(),
            distance_ly: 8.6,
            distance_pc: 2.64,
            ra: "06h45m09s".to_string(),
            dec: "−16°42′58″".to_string(),
            components: vec![StarComponent::new("Sirius A", "A1V")],
        };
        let repo = LocalRepository::with_catalog(vec![sirius]).unwrap();
        create_router(AppState::new(Arc::new(repo)))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_router_creation() {
        let state = AppState::new(RepositoryFactory::create_local());
        let _router = create_router(state);
    }

    #[tokio::test]
    async fn test_routes() {
        let (status, body) = get(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["star_count"], 1);

        let (status, body) = get(app(), "/v1/stars?max_distance_ly=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["stars"][0]["name"], "Sirius");

        let (status, body) = get(app(), "/v1/stars/search?q=sir").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"].as_array().unwrap().len(), 1);

        let (status, body) = get(app(), "/v1/stars/sirius").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["components"][0]["name"], "Sirius A");
    }

    #[tokio::test]
    async fn test_unknown_star_returns_error_body() {
        let (status, body) = get(app(), "/v1/stars/Vega").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }
}
