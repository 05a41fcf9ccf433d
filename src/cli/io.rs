//! JSON output for one-shot CLI commands
//!
//! - Output: one JSON object on stdout
//! - UTF-8 only

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;

use super::errors::CliResult;

/// Write any serializable value to stdout as one JSON document
pub fn write_response<T: Serialize>(data: &T, pretty: bool) -> CliResult<()> {
    let mut stdout = io::stdout();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, data)?;
    } else {
        serde_json::to_writer(&mut stdout, data)?;
    }
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error object to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response: Value = serde_json::json!({
        "error": message,
        "code": code,
    });
    write_response(&response, false)
}

/// Splits `key=value` command-line arguments into query pairs.
///
/// An argument without `=` is a key with an empty value.
pub fn parse_param_args(args: &[String]) -> Vec<(String, String)> {
    args.iter()
        .map(|arg| match arg.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (arg.clone(), String::new()),
        })
        .collect()
}
