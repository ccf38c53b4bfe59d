//! Number and table formatting utilities.
//!
//! This module provides the text rendering used by the inspect command
//! for consistent output presentation.

use crate::audit::types::SummaryRecord;
use crate::utils::time::format_timestamp;
use comfy_table::{presets::UTF8_FULL, Table};

/// Column headers of the summary table
pub const TABLE_HEADERS: [&str; 5] = ["ID", "Date", "Action", "User", "Bucket"];

/// Formats a number with comma separators for thousands.
///
/// # Examples
///
/// ```
/// use cloudtrail_inspector::utils::format::format_number;
///
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// One table row per summary, in display order
pub fn table_rows(summaries: &[SummaryRecord]) -> Vec<[String; 5]> {
    summaries
        .iter()
        .map(|s| {
            [
                s.id.clone(),
                format_timestamp(&s.timestamp),
                s.action.clone(),
                s.actor.clone(),
                s.resource.clone(),
            ]
        })
        .collect()
}

/// Renders summaries as a boxed text table.
///
/// An empty slice still renders the header.
pub fn render_table(summaries: &[SummaryRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(TABLE_HEADERS.to_vec());
    for row in table_rows(summaries) {
        table.add_row(row.to_vec());
    }

    table.to_string()
}
