//! CLI command implementations
//!
//! `serve` is the long-running entry point; `query` and `generate` run once
//! and exit.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use crate::catalog::{CatalogGenerator, CatalogStore, FileSource};
use crate::executor::QueryPipeline;
use crate::http_server::{HttpServer, ProductsResponse};
use crate::observability::{self, Event};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{parse_param_args, write_error, write_response};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Query {
            data,
            params,
            pretty,
        } => query(&data, &params, pretty),
        Command::Generate { count, out, seed } => generate(count, &out, seed),
    }
}

/// Load the catalog and serve the HTTP API until Ctrl-C.
///
/// An unreadable catalog does not stop the server; requests keep retrying
/// the load until data appears.
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::resolve(config_path)?;
    if let Some(port) = port {
        config.port = port;
        config.validate()?;
    }

    observability::init_tracing(&config.environment);
    observability::log_event(Event::BootStart);
    tracing::info!(
        event = %Event::ConfigLoaded,
        path = %config_path.display(),
        data_path = %config.data_path.display(),
        environment = %config.environment,
        "configuration resolved"
    );

    let store = Arc::new(CatalogStore::open(FileSource::new(config.data_path.clone())));
    let server = HttpServer::with_config(config.http_config(), store, config.environment.clone());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Execute one query against a catalog file and print the response
/// envelope to stdout.
pub fn query(data_path: &Path, params: &[String], pretty: bool) -> CliResult<()> {
    observability::init_tracing("production");

    let store = Arc::new(CatalogStore::new(FileSource::new(data_path)));
    store.reload()?;

    let pipeline = QueryPipeline::new(store);
    match pipeline.execute_params(parse_param_args(params)) {
        Ok(page) => write_response(&ProductsResponse::from(page), pretty),
        Err(e) => {
            write_error(e.code().code(), &e.to_string())?;
            Err(e.into())
        }
    }
}

/// Write `count` synthetic records to `out` as a JSON array
pub fn generate(count: usize, out: &Path, seed: Option<u64>) -> CliResult<()> {
    observability::init_tracing("development");

    let mut generator = match seed {
        Some(seed) => CatalogGenerator::with_seed(seed),
        None => CatalogGenerator::new(),
    };
    let records = generator.generate(count);

    let file = File::create(out).map_err(|e| {
        CliError::io_error(format!("Failed to create {}: {}", out.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!(
        event = %Event::CatalogGenerated,
        records = records.len(),
        path = %out.display(),
        "catalog written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;
    use tempfile::TempDir;

    #[test]
    fn test_generate_writes_loadable_catalog() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("products.json");

        generate(25, &out, Some(7)).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let records = parse_catalog(&content).unwrap();
        assert_eq!(records.len(), 25);
        assert_eq!(records[0].id(), Some(&serde_json::json!("prod-0")));
    }

    #[test]
    fn test_generate_same_seed_same_output() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");

        generate(10, &a, Some(42)).unwrap();
        generate(10, &b, Some(42)).unwrap();

        let a: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&a).unwrap()).unwrap();
        let b: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&b).unwrap()).unwrap();
        // Timestamps depend on the wall clock; compare everything else
        let strip = |v: &serde_json::Value| {
            v.as_array()
                .unwrap()
                .iter()
                .map(|r| {
                    let mut r = r.as_object().unwrap().clone();
                    r.remove("createdAt");
                    r.remove("updatedAt");
                    r
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(strip(&a), strip(&b));
    }

    #[test]
    fn test_query_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = query(&dir.path().join("missing.json"), &[], false);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalogd.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = serve(&path, None).unwrap_err();
        assert_eq!(err.code_str(), "CATALOG_CLI_CONFIG_ERROR");
    }
}
