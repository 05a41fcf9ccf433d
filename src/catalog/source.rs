//! Record sources
//!
//! A source produces a complete record collection on demand. The store
//! calls it at startup and again whenever it is found empty.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::errors::{LoadError, LoadResult};
use super::record::Record;

/// Anything that can (re)produce the full catalog
pub trait RecordSource: Send + Sync {
    /// Load every record. Called synchronously; may block on I/O.
    fn load(&self) -> LoadResult<Vec<Record>>;

    /// Short human description for log lines
    fn describe(&self) -> String;
}

/// Catalog stored as a JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn load(&self) -> LoadResult<Vec<Record>> {
        let content = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        if content.trim().is_empty() {
            return Err(LoadError::EmptySource(self.path.display().to_string()));
        }

        parse_catalog(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-process collection
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<Record>,
}

impl MemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for MemorySource {
    fn load(&self) -> LoadResult<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }
}

/// Parses catalog JSON text.
///
/// Accepts either a bare array of objects or an object wrapping the array
/// under `products`. An object without `products` is an empty catalog.
pub fn parse_catalog(content: &str) -> LoadResult<Vec<Record>> {
    let document: Value = serde_json::from_str(content)?;

    let entries = match document {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("products") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| Record::from_value(entry).ok_or(LoadError::InvalidRecord { index }))
        .collect()
}
