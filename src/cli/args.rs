//! CLI argument definitions using clap
//!
//! Commands:
//! - catalogd serve --config <path> [--port <port>]
//! - catalogd query --data <path> [KEY=VALUE ...]
//! - catalogd generate --count <n> --out <path> [--seed <n>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// catalogd - queryable product catalog over HTTP
#[derive(Parser, Debug)]
#[command(name = "catalogd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the catalog and serve the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./catalogd.json")]
        config: PathBuf,

        /// Port override (takes precedence over file and environment)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run a single query against a catalog file and print the result
    Query {
        /// Catalog JSON file
        #[arg(long)]
        data: PathBuf,

        /// Query parameters, e.g. `price_gte=10 sortBy=price order=desc`
        #[arg(value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },

    /// Write a synthetic catalog file
    Generate {
        /// Number of records
        #[arg(long, default_value_t = 1000)]
        count: usize,

        /// Output file
        #[arg(long, default_value = "products.json")]
        out: PathBuf,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_params() {
        let cli = Cli::try_parse_from([
            "catalogd",
            "query",
            "--data",
            "p.json",
            "price_gte=10",
            "order=desc",
        ])
        .unwrap();

        match cli.command {
            Command::Query { data, params, pretty } => {
                assert_eq!(data, PathBuf::from("p.json"));
                assert_eq!(params, vec!["price_gte=10", "order=desc"]);
                assert!(!pretty);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["catalogd", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./catalogd.json"));
                assert!(port.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_requires_numeric_count() {
        assert!(Cli::try_parse_from(["catalogd", "generate", "--count", "many"]).is_err());
    }
}
