//! Error types for the item service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Item Error Enum ==
/// Unified error type for the item service.
#[derive(Error, Debug)]
pub enum ItemError {
    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    /// The `id` query parameter is missing or not an integer
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// No row matches the requested id
    #[error("Item not found: {0}")]
    NotFound(i64),

    /// Any other failure reported by the backing store
    #[error("Store error: {0}")]
    Store(String),

    /// HTTP method not served by /items
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl From<rusqlite::Error> for ItemError {
    fn from(err: rusqlite::Error) -> Self {
        ItemError::Store(err.to_string())
    }
}

impl From<QueryRejection> for ItemError {
    fn from(rejection: QueryRejection) -> Self {
        ItemError::InvalidId(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let status = match &self {
            ItemError::BadRequest(_) | ItemError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ItemError::NotFound(_) => StatusCode::NOT_FOUND,
            ItemError::Store(msg) => {
                error!("store failure: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ItemError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the item service.
pub type Result<T> = std::result::Result<T, ItemError>;
