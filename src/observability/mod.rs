//! Observability subsystem for catalogd
//!
//! Structured logging through `tracing`. Lifecycle steps are tagged with a
//! typed [`Event`] so every line has a stable, greppable name.
//!
//! # Usage
//!
//! ```ignore
//! use catalogd::observability::{self, Event};
//!
//! observability::init_tracing("development");
//! observability::log_event(Event::BootStart);
//! tracing::info!(event = %Event::CatalogLoaded, records = 20, "catalog loaded");
//! ```

mod events;

pub use events::Event;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(environment: &str) -> &'static str {
    if environment == "production" {
        "catalogd=info,tower_http=warn"
    } else {
        "catalogd=debug,tower_http=info"
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// environment default. Calling it twice is harmless.
pub fn init_tracing(environment: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log a lifecycle event with no extra fields
pub fn log_event(event: Event) {
    if event.is_failure() {
        tracing::error!(event = %event);
    } else {
        tracing::info!(event = %event);
    }
}
