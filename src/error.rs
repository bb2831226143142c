use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ApiResponse;

/// ApiError
///
/// The single error taxonomy every handler resolves into. Each variant owns
/// its HTTP status; `IntoResponse` serializes the `{success: false, message}`
/// envelope so error bodies share the shape of success bodies.
///
/// The `#[from]` conversions let handlers bubble repository and upstream
/// failures with `?` instead of mapping them case by case.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid identity (401).
    #[error("Not authorized to access this route")]
    Unauthorized,

    /// Authenticated but lacking the admin role (403).
    #[error("Admin access required")]
    Forbidden,

    /// Rejected payload content (400). Carries the user-facing reason.
    #[error("{0}")]
    Validation(String),

    /// Lookup miss (404). Carries the entity name, e.g. "Module".
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Duplicate state transition (409), e.g. completing an item twice.
    #[error("{0}")]
    Conflict(String),

    /// Storage failure (500). Surfaced with the underlying message.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// Auth-provider call failure (500).
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 500-class failures carry detail the client message alone would lose,
        // so record them on the request span before responding.
        match &self {
            ApiError::Database(e) => tracing::error!("database error: {:?}", e),
            ApiError::Upstream(e) => tracing::error!("auth provider error: {:?}", e),
            _ => {}
        }

        let body = ApiResponse::failure(self.to_string());
        (self.status(), Json(body)).into_response()
    }
}
