//! Query pipeline for catalogd
//!
//! Execution flow (strict order):
//! 1. Take a snapshot of the store, reloading once if it is empty
//! 2. Apply the global search term
//! 3. Apply column filters, left to right
//! 4. Sort (if a sort field is given)
//! 5. Paginate
//! 6. Return the page with its count metadata
//!
//! The pipeline only reads the snapshot. Sorting and slicing work on a
//! list of references, so concurrent queries never observe each other.

use std::sync::Arc;

use crate::catalog::{CatalogStore, Record};
use crate::observability::Event;
use crate::planner::QuerySpec;

use super::errors::{ExecutorError, ExecutorResult};
use super::filters::PredicateFilter;
use super::paginator::Paginator;
use super::result::ResultPage;
use super::sorter::ResultSorter;

/// Runs queries against a shared catalog store
#[derive(Debug, Clone)]
pub struct QueryPipeline {
    store: Arc<CatalogStore>,
}

impl QueryPipeline {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Parses raw query-string pairs and executes them
    pub fn execute_params<I, K, V>(&self, pairs: I) -> ExecutorResult<ResultPage>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.execute(&QuerySpec::from_params(pairs))
    }

    /// Executes a query and returns one page of results.
    ///
    /// The same query over unchanged store contents returns the same page.
    pub fn execute(&self, spec: &QuerySpec) -> ExecutorResult<ResultPage> {
        let snapshot = self.loaded_snapshot()?;

        // Steps 2-3: search, then filters
        let candidates: Vec<&Record> = snapshot.iter().collect();
        let mut candidates =
            PredicateFilter::apply(candidates, spec.global_search.as_deref(), &spec.filters);

        // Step 4: sort
        ResultSorter::sort(&mut candidates, spec.sort_field.as_deref(), spec.sort_order);

        // Step 5: paginate
        let (page, window) = Paginator::paginate(&candidates, spec.limit, spec.offset);
        let records: Vec<Record> = page.iter().map(|r| (*r).clone()).collect();

        tracing::info!(
            event = %Event::QueryExecuted,
            total = window.total,
            returned = records.len(),
            page = window.page_index,
            pages = window.page_count,
            "query complete"
        );

        Ok(ResultPage::new(records, window))
    }

    /// Snapshot of a non-empty store.
    ///
    /// An empty store gets exactly one synchronous reload attempt. If it is
    /// still empty afterwards the query fails rather than reporting an
    /// empty result.
    fn loaded_snapshot(&self) -> ExecutorResult<Arc<Vec<Record>>> {
        let snapshot = self.store.snapshot();
        if !snapshot.is_empty() {
            return Ok(snapshot);
        }

        tracing::warn!(event = %Event::ReloadTriggered, "catalog empty, retrying load");
        // Load failures are logged by the store; emptiness is what matters here
        let _ = self.store.reload_if_empty();

        let snapshot = self.store.snapshot();
        if snapshot.is_empty() {
            tracing::error!(event = %Event::QueryRejected, "no products available after reload");
            return Err(ExecutorError::data_unavailable(self.store.source_description()));
        }
        Ok(snapshot)
    }
}
