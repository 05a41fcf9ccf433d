//! catalogd - read-only product catalog query service
//!
//! Loads a JSON catalog into memory and answers filtered, searched, sorted
//! and paginated queries over HTTP or from the command line.

pub mod catalog;
pub mod cli;
pub mod executor;
pub mod http_server;
pub mod observability;
pub mod planner;
