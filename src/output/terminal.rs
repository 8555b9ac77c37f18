//! Terminal output.

use super::Report;
use crate::processing::OverlapKind;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Render the block table and the overlap list, one line per entry.
pub fn format_report(report: &Report) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.blocks.len() + report.conflicts.len() + 2);
    lines.push(format!(
        "{} {} {} {} {}",
        format_field("cnt", 5),
        format_field("cidr", 45),
        format_field("first", 41),
        format_field("last", 41),
        format_field("next", 45)
    ));

    for (i, b) in report.blocks.iter().enumerate() {
        let next = b
            .next
            .map(|n| n.to_string())
            .unwrap_or_else(|| "None".to_string());
        lines.push(format!(
            "{} {} {} {} {}",
            format_field(i, 5),
            format_field(b.cidr, 45),
            format_field(b.first, 41),
            format_field(b.last, 41),
            format_field(next, 45)
        ));
    }

    if report.conflicts.is_empty() {
        lines.push(format!("#{}# no overlapping CIDRs", "OK".green()));
    }
    for c in &report.conflicts {
        let relation = match c.kind {
            OverlapKind::Equal => "equals",
            OverlapKind::Contains => "contains",
            OverlapKind::ContainedBy => "is inside",
        };
        lines.push(format!(
            "#{}# #{} {} {} #{} {}",
            "OVERLAP".on_red(),
            c.first_index,
            c.first,
            relation,
            c.second_index,
            c.second
        ));
    }
    lines
}

/// Print the report to stdout.
pub fn print_report(report: &Report) {
    log::info!(
        "#Start print_report() blocks={} conflicts={}",
        report.blocks.len(),
        report.conflicts.len()
    );
    for line in format_report(report) {
        println!("{line}");
    }
}
