//! CLI module for catalogd
//!
//! Provides command-line interface for:
//! - serve: load the catalog and run the HTTP API
//! - query: one-shot query against a catalog file
//! - generate: write a synthetic catalog

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{generate, query, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_param_args, write_error, write_response};
