//! Query Executor subsystem for catalogd
//!
//! Consumes a [`QuerySpec`](crate::planner::QuerySpec) and a store snapshot
//! and produces one deterministic page of results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Global search over top-level field values
//! 2. Column filters (AND, left fold)
//! 3. Sort by one field (stable)
//! 4. Offset/limit pagination with total and page counts

mod errors;
mod executor;
mod filters;
mod paginator;
mod result;
mod sorter;

pub use errors::{ExecutorError, ExecutorErrorCode, ExecutorResult};
pub use executor::QueryPipeline;
pub use filters::{CompiledFilter, PredicateFilter};
pub use paginator::{PageWindow, Paginator};
pub use result::ResultPage;
pub use sorter::ResultSorter;
