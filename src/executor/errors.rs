//! Executor error types
//!
//! Error codes:
//! - CATALOG_DATA_UNAVAILABLE: store empty even after a reload attempt
//! - CATALOG_INTERNAL: unexpected failure while running the pipeline
//!
//! Malformed filters and unknown parameters are not errors; they degrade
//! to no-op or exclusion inside the evaluator.

use thiserror::Error;

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Executor-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorErrorCode {
    DataUnavailable,
    Internal,
}

impl ExecutorErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorErrorCode::DataUnavailable => "CATALOG_DATA_UNAVAILABLE",
            ExecutorErrorCode::Internal => "CATALOG_INTERNAL",
        }
    }
}

/// Query pipeline failures
#[derive(Debug, Clone, Error)]
pub enum ExecutorError {
    /// No records could be loaded; distinct from a query that matches nothing
    #[error("No products available. Ensure {origin} exists and contains valid data.")]
    DataUnavailable { origin: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ExecutorError {
    pub fn data_unavailable(origin: impl Into<String>) -> Self {
        ExecutorError::DataUnavailable {
            origin: origin.into(),
        }
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        ExecutorError::Internal(reason.into())
    }

    pub fn code(&self) -> ExecutorErrorCode {
        match self {
            ExecutorError::DataUnavailable { .. } => ExecutorErrorCode::DataUnavailable,
            ExecutorError::Internal(_) => ExecutorErrorCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ExecutorError::data_unavailable("products.json").code().code(),
            "CATALOG_DATA_UNAVAILABLE"
        );
        assert_eq!(
            ExecutorError::internal("boom").code().code(),
            "CATALOG_INTERNAL"
        );
    }

    #[test]
    fn test_data_unavailable_message_names_source() {
        let err = ExecutorError::data_unavailable("products.json");
        let display = err.to_string();
        assert!(display.starts_with("No products available"));
        assert!(display.contains("products.json"));
    }
}
