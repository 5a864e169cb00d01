//! Table formatter implementation.
//!
//! Responsibilities:
//! - Render models as space-aligned tables with an `=` separator row.
//! - Append a "Showing x-y of n" footer when the server reports a total.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.

use anyhow::Result;
use edgex_client::models::{AddOutcome, UpdateOutcome};
use edgex_client::{DeleteReport, ListResult, ServiceReport};
use serde::Serialize;

use super::common::DEFAULT_MISSING_VALUE;
use super::{Formatter, ResourceDisplay, ServiceDocument};

/// Narrowest column width, for readability.
const MIN_COLUMN_WIDTH: usize = 4;

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_list<T>(&self, result: &ListResult<T>, verbose: bool) -> Result<String>
    where
        T: ResourceDisplay + Serialize,
    {
        if result.items.is_empty() {
            return Ok(format_empty_message(T::PLURAL, result.offset, result.total_count));
        }

        let mut output = render_items(&result.items, verbose);
        if let Some(footer) = build_pagination_footer(result.offset, result.items.len(), result.total_count) {
            output.push('\n');
            output.push_str(&footer);
            output.push('\n');
        }
        Ok(output)
    }

    fn format_item<T>(&self, item: &T, verbose: bool) -> Result<String>
    where
        T: ResourceDisplay + Serialize,
    {
        Ok(render_items(std::slice::from_ref(item), verbose))
    }

    fn format_add_outcomes(&self, outcomes: &[AddOutcome]) -> Result<String> {
        if outcomes.is_empty() {
            return Ok("Nothing was added.\n".to_string());
        }
        Ok(render_items(outcomes, false))
    }

    fn format_update_outcome(&self, _outcome: &UpdateOutcome, summary: &str) -> Result<String> {
        Ok(format!("{}\n", summary))
    }

    fn format_update_outcomes(&self, outcomes: &[UpdateOutcome], summary: &str) -> Result<String> {
        let failed: Vec<String> = outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| {
                format!(
                    "  {}: {}",
                    o.status_code,
                    o.message.as_deref().unwrap_or(DEFAULT_MISSING_VALUE)
                )
            })
            .collect();
        let mut output = format!("{}\n", summary);
        if !failed.is_empty() {
            output.push_str("Failed updates:\n");
            for line in failed {
                output.push_str(&line);
                output.push('\n');
            }
        }
        Ok(output)
    }

    fn format_count(&self, what: &str, count: u64) -> Result<String> {
        Ok(format!("{}: {}\n", what, count))
    }

    fn format_service_reports<T>(&self, reports: &[ServiceReport<T>]) -> Result<String>
    where
        T: ResourceDisplay + Serialize,
    {
        let mut headers = vec!["SERVICE", "STATUS"];
        let extra = T::headers(false);
        headers.extend(extra.iter().copied());

        let mut rows = Vec::with_capacity(reports.len());
        for report in reports {
            match &report.result {
                Ok(response) => {
                    for cells in response.row_data(false) {
                        let mut row = vec![report.service.to_string(), "OK".to_string()];
                        row.extend(cells);
                        rows.push(row);
                    }
                }
                Err(e) => {
                    let mut row = vec![report.service.to_string(), "ERROR".to_string()];
                    row.push(e.to_string());
                    row.extend(std::iter::repeat_n(String::new(), extra.len().saturating_sub(1)));
                    rows.push(row);
                }
            }
        }

        Ok(render_table(&headers, &rows))
    }

    fn format_service_documents<T>(&self, reports: &[ServiceReport<T>]) -> Result<String>
    where
        T: ServiceDocument + Serialize,
    {
        let mut output = String::new();
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&format!("== {} ==\n", report.service));
            match &report.result {
                Ok(response) => {
                    output.push_str(&serde_json::to_string_pretty(response.document())?);
                    output.push('\n');
                }
                Err(e) => output.push_str(&format!("Error: {}\n", e)),
            }
        }
        Ok(output)
    }

    fn format_purge_reports(&self, reports: &[DeleteReport]) -> Result<String> {
        let mut output = render_items(reports, false);

        let failures: Vec<String> = reports
            .iter()
            .flat_map(|r| {
                r.failures
                    .iter()
                    .map(move |(key, error)| format!("  {} '{}': {}", r.resource, key, error))
            })
            .collect();
        if !failures.is_empty() {
            output.push_str("\nFailed deletes:\n");
            for line in failures {
                output.push_str(&line);
                output.push('\n');
            }
        }
        Ok(output)
    }
}

fn render_items<T: ResourceDisplay>(items: &[T], verbose: bool) -> String {
    let rows: Vec<Vec<String>> = items.iter().flat_map(|item| item.row_data(verbose)).collect();
    render_table(&T::headers(verbose), &rows)
}

/// Render headers and rows with every column padded to its widest cell.
///
/// Short rows are padded with blanks; the last column is not padded.
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| h.chars().count().max(MIN_COLUMN_WIDTH))
        .collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let separators: Vec<String> = widths.iter().map(|w| "=".repeat(*w)).collect();

    let mut output = String::new();
    push_row(&mut output, headers, &widths);
    push_row(&mut output, &separators.iter().map(String::as_str).collect::<Vec<_>>(), &widths);
    for row in rows {
        push_row(&mut output, &row.iter().map(String::as_str).collect::<Vec<_>>(), &widths);
    }
    output
}

fn push_row(output: &mut String, cells: &[&str], widths: &[usize]) {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let cell = cells.get(i).copied().unwrap_or("");
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.chars().count())));
    }
    output.push_str(line.trim_end());
    output.push('\n');
}

/// Build a pagination footer string.
///
/// - `offset` is zero-based
/// - `total` is the server-reported total; without it there is no footer
pub(crate) fn build_pagination_footer(offset: usize, shown: usize, total: Option<u64>) -> Option<String> {
    let total = total?;
    let start = offset.saturating_add(1);
    let end = offset.saturating_add(shown);
    Some(format!("Showing {}-{} of {}", start, end, total))
}

/// Format an empty collection message with offset awareness.
pub(crate) fn format_empty_message(plural: &str, offset: usize, total: Option<u64>) -> String {
    match total {
        Some(total) if total > 0 && offset as u64 >= total => format!(
            "No {} found at offset {} ({} in total).\n",
            plural, offset, total
        ),
        _ => format!("No {} found.\n", plural),
    }
}
