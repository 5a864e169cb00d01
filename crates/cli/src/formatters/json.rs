//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all result types as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.
//! - Pagination footers (a list prints only its items, so the output parses
//!   back into `Vec<T>`).

use anyhow::Result;
use edgex_client::models::{AddOutcome, CountResponse, UpdateOutcome};
use edgex_client::{DeleteReport, ListResult, ServiceReport};
use serde::Serialize;
use serde_json::{Value, json};

use super::{Formatter, ResourceDisplay, ServiceDocument};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_list<T>(&self, result: &ListResult<T>, _verbose: bool) -> Result<String>
    where
        T: ResourceDisplay + Serialize,
    {
        pretty(&result.items)
    }

    fn format_item<T>(&self, item: &T, _verbose: bool) -> Result<String>
    where
        T: ResourceDisplay + Serialize,
    {
        pretty(item)
    }

    fn format_add_outcomes(&self, outcomes: &[AddOutcome]) -> Result<String> {
        pretty(outcomes)
    }

    fn format_update_outcome(&self, outcome: &UpdateOutcome, _summary: &str) -> Result<String> {
        pretty(outcome)
    }

    fn format_update_outcomes(&self, outcomes: &[UpdateOutcome], _summary: &str) -> Result<String> {
        pretty(outcomes)
    }

    fn format_count(&self, _what: &str, count: u64) -> Result<String> {
        pretty(&CountResponse { count })
    }

    fn format_service_reports<T>(&self, reports: &[ServiceReport<T>]) -> Result<String>
    where
        T: ResourceDisplay + Serialize,
    {
        pretty(&report_values(reports)?)
    }

    fn format_service_documents<T>(&self, reports: &[ServiceReport<T>]) -> Result<String>
    where
        T: ServiceDocument + Serialize,
    {
        pretty(&report_values(reports)?)
    }

    fn format_purge_reports(&self, reports: &[DeleteReport]) -> Result<String> {
        pretty(reports)
    }
}

/// `{"service", "ok", "response" | "error"}` per report, in request order.
fn report_values<T: Serialize>(reports: &[ServiceReport<T>]) -> Result<Vec<Value>> {
    reports
        .iter()
        .map(|report| {
            Ok(match &report.result {
                Ok(response) => json!({
                    "service": report.service,
                    "ok": true,
                    "response": serde_json::to_value(response)?,
                }),
                Err(e) => json!({
                    "service": report.service,
                    "ok": false,
                    "error": e.to_string(),
                }),
            })
        })
        .collect()
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}
