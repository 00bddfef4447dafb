//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::RepositoryError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
    Repository(RepositoryError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Repository(e) => match e {
                RepositoryError::NotFound { .. } => StatusCode::NOT_FOUND,
                RepositoryError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn body(&self) -> ApiError {
        match self {
            AppError::NotFound(msg) => ApiError::new("NOT_FOUND", msg.clone()),
            AppError::BadRequest(msg) => ApiError::new("BAD_REQUEST", msg.clone()),
            AppError::Internal(msg) => ApiError::new("INTERNAL_ERROR", msg.clone()),
            AppError::Repository(e) => {
                let code = match e {
                    RepositoryError::NotFound { .. } => "NOT_FOUND",
                    RepositoryError::ValidationError { .. } => "INVALID_CATALOG",
                    _ => "REPOSITORY_ERROR",
                };
                let error = ApiError::new(code, e.to_string());
                let context = e.context();
                if context.is_empty() {
                    error
                } else {
                    error.with_details(context.to_string())
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
        }
        (status, Json(self.body())).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ErrorContext;

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let err = AppError::from(RepositoryError::not_found_with_context(
            "No star named 'Vega'",
            ErrorContext::new("find_star").with_entity_id("Vega"),
        ));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        let body = err.body();
        assert_eq!(body.code, "NOT_FOUND");
        assert!(body.details.unwrap().contains("id=Vega"));
    }

    #[test]
    fn test_storage_error_maps_to_500() {
        let err = AppError::from(RepositoryError::storage("disk gone"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().code, "REPOSITORY_ERROR");
        assert!(err.body().details.is_none());
    }

    #[test]
    fn test_bad_request() {
        let response = AppError::BadRequest("bad".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
