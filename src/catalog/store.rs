//! In-memory record store
//!
//! Holds the full catalog behind an `Arc` so each query gets a cheap,
//! consistent snapshot. Queries only ever read the snapshot; the reload
//! path is the single writer and swaps the whole collection at once.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::observability::Event;

use super::errors::LoadResult;
use super::record::Record;
use super::source::RecordSource;

/// Shared holder of the catalog
pub struct CatalogStore {
    source: Box<dyn RecordSource>,
    records: RwLock<Arc<Vec<Record>>>,
    /// Serializes reloads; never held while serving a snapshot
    reload_lock: Mutex<()>,
}

impl CatalogStore {
    /// Creates an empty store bound to `source`. Nothing is loaded yet.
    pub fn new(source: impl RecordSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            records: RwLock::new(Arc::new(Vec::new())),
            reload_lock: Mutex::new(()),
        }
    }

    /// Creates a store and performs the startup load.
    ///
    /// A failed startup load is logged and leaves the store empty; the
    /// first query will try again.
    pub fn open(source: impl RecordSource + 'static) -> Self {
        let store = Self::new(source);
        let _ = store.reload();
        store
    }

    /// Consistent view of the whole catalog for one request
    pub fn snapshot(&self) -> Arc<Vec<Record>> {
        let guard = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Description of the backing source
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Reloads the catalog from its source.
    ///
    /// On success the new collection replaces the old one and its size is
    /// returned. On failure the previous collection stays in place.
    pub fn reload(&self) -> LoadResult<usize> {
        let _guard = self.reload_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.load_locked()
    }

    /// Reloads only if the store is still empty once the reload lock is held.
    ///
    /// Concurrent callers that find the store empty queue up here; whoever
    /// gets the lock second sees the first caller's result and skips the
    /// load. Returns the record count after the call.
    pub fn reload_if_empty(&self) -> LoadResult<usize> {
        let _guard = self.reload_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.len();
        if current > 0 {
            return Ok(current);
        }
        self.load_locked()
    }

    fn load_locked(&self) -> LoadResult<usize> {
        let source = self.source.describe();
        tracing::info!(event = %Event::CatalogLoadBegin, %source, "loading catalog");

        let records = match self.source.load() {
            Ok(records) => records,
            Err(err) => {
                tracing::error!(
                    event = %Event::CatalogLoadFailed,
                    %source,
                    code = err.code(),
                    error = %err,
                    "failed to load catalog, keeping previous contents"
                );
                return Err(err);
            }
        };

        let count = records.len();
        {
            let mut slot = self.records.write().unwrap_or_else(PoisonError::into_inner);
            *slot = Arc::new(records);
        }

        if count == 0 {
            tracing::warn!(event = %Event::CatalogEmpty, %source, "catalog source contains no records");
        } else {
            tracing::info!(event = %Event::CatalogLoaded, %source, records = count, "catalog loaded");
        }

        Ok(count)
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("source", &self.source.describe())
            .field("records", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::errors::LoadError;
    use crate::catalog::source::MemorySource;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn rec(id: i64) -> Record {
        Record::from_value(json!({"id": id})).unwrap()
    }

    /// Source that counts loads and can be switched to failing
    struct CountingSource {
        loads: Arc<AtomicUsize>,
        fail: bool,
        records: Vec<Record>,
    }

    impl RecordSource for CountingSource {
        fn load(&self) -> LoadResult<Vec<Record>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(LoadError::EmptySource("counting".to_string()))
            } else {
                Ok(self.records.clone())
            }
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = CatalogStore::new(MemorySource::new(vec![rec(1)]));
        assert!(store.is_empty());
        assert_eq!(store.reload().unwrap(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_open_loads_immediately() {
        let store = CatalogStore::open(MemorySource::new(vec![rec(1), rec(2)]));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let store = CatalogStore::open(MemorySource::new(vec![rec(1)]));
        let before = store.snapshot();
        store.reload().unwrap();
        assert_eq!(before.len(), 1);
        assert!(!Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_reload_if_empty_skips_loaded_store() {
        let loads = Arc::new(AtomicUsize::new(0));
        let store = CatalogStore::new(CountingSource {
            loads: Arc::clone(&loads),
            fail: false,
            records: vec![rec(1)],
        });

        assert_eq!(store.reload_if_empty().unwrap(), 1);
        assert_eq!(store.reload_if_empty().unwrap(), 1);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_reload_keeps_store_empty() {
        let loads = Arc::new(AtomicUsize::new(0));
        let store = CatalogStore::open(CountingSource {
            loads: Arc::clone(&loads),
            fail: true,
            records: Vec::new(),
        });

        assert!(store.is_empty());
        assert!(store.reload_if_empty().is_err());
        assert!(store.is_empty());
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }
}
