//! # HTTP Errors
//!
//! Maps pipeline failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::executor::ExecutorError;
use crate::observability::Event;

/// Message returned for any failure that is not a data-availability problem
pub const GENERIC_ERROR: &str = "Internal server error";

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Catalog could not be loaded, even after a retry
    #[error("{0}")]
    DataUnavailable(ExecutorError),

    /// Anything unexpected; details are logged, not returned
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DataUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ExecutorError> for ApiError {
    fn from(err: ExecutorError) -> Self {
        match err {
            ExecutorError::DataUnavailable { .. } => ApiError::DataUnavailable(err),
            ExecutorError::Internal(reason) => ApiError::Internal(reason),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(reason) = &self {
            tracing::error!(event = %Event::QueryFailed, %reason, "request failed");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
