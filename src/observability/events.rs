//! Observability events for catalogd
//!
//! Every log line that marks a lifecycle step carries one of these as its
//! `event` field, so logs can be filtered by a stable name.

use std::fmt;

/// Observable events in catalogd
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP listener bound, ready for requests
    Serving,
    /// Shutdown complete
    ShutdownComplete,

    // Catalog
    /// Catalog load from source begins
    CatalogLoadBegin,
    /// Catalog loaded with at least one record
    CatalogLoaded,
    /// Catalog source held zero records
    CatalogEmpty,
    /// Catalog source could not be read or parsed
    CatalogLoadFailed,
    /// Empty store found at query time, reload attempted
    ReloadTriggered,
    /// Dummy catalog written
    CatalogGenerated,

    // Query
    /// Query executed successfully
    QueryExecuted,
    /// Query rejected because no data is available
    QueryRejected,
    /// Query failed unexpectedly
    QueryFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            // Boot & Lifecycle
            Event::BootStart => "CATALOGD_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "CATALOGD_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            // Catalog
            Event::CatalogLoadBegin => "CATALOG_LOAD_BEGIN",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::CatalogEmpty => "CATALOG_EMPTY",
            Event::CatalogLoadFailed => "CATALOG_LOAD_FAILED",
            Event::ReloadTriggered => "CATALOG_RELOAD_TRIGGERED",
            Event::CatalogGenerated => "CATALOG_GENERATED",

            // Query
            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::QueryFailed => "QUERY_FAILED",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::CatalogLoadFailed | Event::QueryRejected | Event::QueryFailed
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
