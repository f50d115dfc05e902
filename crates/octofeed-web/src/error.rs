//! Error types for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use octofeed_store::StoreError;

/// Errors a request handler can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::DuplicateEvent(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::ActorNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::LoginMismatch { .. }) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(error = %self, status = %status, "request rejected");
        // Rejections carry the status code alone, no body.
        status.into_response()
    }
}
