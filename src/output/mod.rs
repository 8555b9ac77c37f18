//! Output formatting for CIDR summaries.
//!
//! - [`report`] - the summary built from a CIDR list
//! - [`terminal`] - aligned table with highlighted overlaps
//! - [`json`] - machine-readable output

mod json;
mod report;
mod terminal;

pub use json::{print_json, report_json};
pub use report::{BlockSummary, Report};
pub use terminal::{format_field, format_report, print_report};
