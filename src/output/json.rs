//! JSON output.

use super::Report;
use std::error::Error;

/// Serialize the report as pretty-printed JSON.
pub fn report_json(report: &Report) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(report).map_err(|e| format!("Error serializing JSON: {e}").into())
}

/// Print the report as JSON to stdout.
pub fn print_json(report: &Report) -> Result<(), Box<dyn Error>> {
    println!("{}", report_json(report)?);
    Ok(())
}
