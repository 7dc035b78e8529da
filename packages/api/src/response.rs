// ABOUTME: Shared API response types and error handling
// ABOUTME: Maps domain errors onto HTTP status codes with a JSON envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use kiosk_stats::StatsError;
use kiosk_storage::StorageError;
use kiosk_upstream::UpstreamError;

/// Standard API error envelope
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Everything a handler can fail with. Validation failures never reach
/// this type; axum's extractors reject them with a client error first.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            ApiError::Storage(StorageError::NotFound) => {
                (StatusCode::NOT_FOUND, "Record not found".to_string())
            }
            ApiError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
            ApiError::Upstream(_) => {
                (StatusCode::BAD_GATEWAY, "Upstream unavailable".to_string())
            }
            ApiError::Stats(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Report data unavailable".to_string(),
            ),
        };

        error!("Request failed: {}", self);

        (status, ResponseJson(ApiResponse::<()>::error(message))).into_response()
    }
}
