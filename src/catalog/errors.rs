//! # Catalog Errors
//!
//! Error types for loading the record collection from its source.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for catalog load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Failures while (re)populating the record store
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file missing or unreadable
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source is not valid JSON
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Source exists but holds no bytes
    #[error("Catalog source is empty: {0}")]
    EmptySource(String),

    /// An element of the catalog array is not an object
    #[error("Catalog entry {index} is not an object")]
    InvalidRecord { index: usize },
}

impl LoadError {
    /// Stable code string for log lines
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "CATALOG_LOAD_IO",
            LoadError::Parse(_) => "CATALOG_LOAD_PARSE",
            LoadError::EmptySource(_) => "CATALOG_LOAD_EMPTY",
            LoadError::InvalidRecord { .. } => "CATALOG_LOAD_INVALID_RECORD",
        }
    }
}
