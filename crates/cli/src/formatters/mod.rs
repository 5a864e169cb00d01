//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the two output formats: aligned tables and pretty-printed JSON.
//! - Describe each EdgeX model's table columns through `ResourceDisplay`.
//! - Write rendered output to stdout, a pager, or a file.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//! - Progress output (see `progress`); formatters never write to stderr.
//!
//! Invariants:
//! - JSON output of a model deserializes back into the same model type.
//! - Tables pad every column to its widest cell.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | Table | Human message | `No devices found.` |
//!
//! ## Missing/Null Value Handling
//!
//! | Format | Missing Value Representation |
//! |--------|------------------------------|
//! | JSON | field omitted or `null` (via serde) |
//! | Table | `N/A` |
//!
//! Use `common::DEFAULT_MISSING_VALUE` when adding new display impls.

use anyhow::Result;
use edgex_client::models::{AddOutcome, ConfigResponse, MetricsResponse, UpdateOutcome};
use edgex_client::{DeleteReport, ListResult, ServiceReport};
use serde::Serialize;
use serde_json::Value;

mod common;
mod json;
mod resource_impls;
mod table;

#[cfg(test)]
mod tests;

pub use common::{OutputOptions, output_result};
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Table }
    }
}

/// Column layout of one model in table output.
///
/// One item may produce several rows (an event with its readings, a
/// device with its commands).
pub trait ResourceDisplay {
    /// Plural noun used in "No ... found." messages.
    const PLURAL: &'static str;

    /// Column headers; `verbose` selects the extended set.
    fn headers(verbose: bool) -> Vec<&'static str>;

    /// Cell values, one inner Vec per row.
    fn row_data(&self, verbose: bool) -> Vec<Vec<String>>;
}

/// Free-form document returned by the config and metrics routes.
pub trait ServiceDocument {
    fn document(&self) -> &Value;
}

impl ServiceDocument for ConfigResponse {
    fn document(&self) -> &Value {
        &self.config
    }
}

impl ServiceDocument for MetricsResponse {
    fn document(&self) -> &Value {
        &self.metrics
    }
}

/// Formatter trait for the two output types.
pub trait Formatter {
    /// Format one page of a list call.
    fn format_list<T>(&self, result: &ListResult<T>, verbose: bool) -> Result<String>
    where
        T: ResourceDisplay + Serialize;

    /// Format a single item fetched by name or id.
    fn format_item<T>(&self, item: &T, verbose: bool) -> Result<String>
    where
        T: ResourceDisplay + Serialize;

    /// Format the per-item outcomes of an add request.
    fn format_add_outcomes(&self, outcomes: &[AddOutcome]) -> Result<String>;

    /// Format the outcome of an update or delete; `summary` is the table-mode text.
    fn format_update_outcome(&self, outcome: &UpdateOutcome, summary: &str) -> Result<String>;

    /// Format the per-item outcomes of a bulk update.
    fn format_update_outcomes(&self, outcomes: &[UpdateOutcome], summary: &str) -> Result<String>;

    /// Format a `Count` response.
    fn format_count(&self, what: &str, count: u64) -> Result<String>;

    /// Format ping or version results, one row per service.
    fn format_service_reports<T>(&self, reports: &[ServiceReport<T>]) -> Result<String>
    where
        T: ResourceDisplay + Serialize;

    /// Format config or metrics results, one document per service.
    fn format_service_documents<T>(&self, reports: &[ServiceReport<T>]) -> Result<String>
    where
        T: ServiceDocument + Serialize;

    /// Format the purge summary.
    fn format_purge_reports(&self, reports: &[DeleteReport]) -> Result<String>;
}

/// Render `value` with the formatter for `format`.
///
/// The trait has generic methods, so formatters are picked per call rather
/// than boxed.
macro_rules! with_formatter {
    ($format:expr, |$f:ident| $body:expr) => {
        match $format {
            $crate::formatters::OutputFormat::Table => {
                let $f = $crate::formatters::TableFormatter;
                $body
            }
            $crate::formatters::OutputFormat::Json => {
                let $f = $crate::formatters::JsonFormatter;
                $body
            }
        }
    };
}

pub(crate) use with_formatter;
