//! Record Store subsystem
//!
//! Owns the in-memory catalog: the record type and its typed accessors,
//! the sources a catalog can be loaded from, and the shared store that
//! hands out per-request snapshots and recovers from an empty state by
//! reloading.

mod errors;
mod generator;
mod record;
mod source;
mod store;

pub use errors::{LoadError, LoadResult};
pub use generator::CatalogGenerator;
pub use record::{fold, number_of, parse_number, text_of, FieldPath, Record, RATING_RATE};
pub use source::{parse_catalog, FileSource, MemorySource, RecordSource};
pub use store::CatalogStore;
