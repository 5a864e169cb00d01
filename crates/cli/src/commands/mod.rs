//! CLI command implementations.
//!
//! Responsibilities:
//! - Hold the per-run `CommandContext` (client, output options, cancellation).
//! - Render results through the shared formatters.
//! - Parse the `--age` durations used by the age-based deletes.
//!
//! Does NOT handle:
//! - Argument parsing (see `args`) or routing (see `dispatch`).
//! - Direct REST API calls (handled by the client crate).
//!
//! Invariants:
//! - Every network call goes through `CommandContext::run` so Ctrl+C aborts it.
//! - Messages for humans go to stderr and are silenced by `--quiet`.

pub mod crud;
pub mod db;
pub mod device;
pub mod device_command;
pub mod device_profile;
pub mod event;
pub mod notification;
pub mod reading;
pub mod subscription;
pub mod system;
pub mod transmission;

use anyhow::Result;
use edgex_client::models::{AddOutcome, UpdateOutcome};
use edgex_client::{ClientError, EdgexClient, ListResult};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;

use crate::cancellation::CancellationToken;
use crate::formatters::{Formatter, OutputOptions, ResourceDisplay, output_result, with_formatter};
use crate::progress::Spinner;

/// Everything a command handler needs for one run.
pub struct CommandContext {
    pub client: EdgexClient,
    pub output: OutputOptions,
    pub cancel: CancellationToken,
}

impl CommandContext {
    pub fn new(client: EdgexClient, output: OutputOptions, cancel: CancellationToken) -> Self {
        Self {
            client,
            output,
            cancel,
        }
    }

    /// Await `future` behind a spinner; Ctrl+C aborts it with `Cancelled`.
    pub async fn run<F, T, E>(&self, label: impl Into<String>, future: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, E>>,
        E: Into<anyhow::Error>,
    {
        let _spinner = Spinner::new(!self.output.quiet, label);
        self.cancel.run(future).await
    }

    /// Print a status line on stderr unless `--quiet`.
    pub fn notice(&self, message: impl AsRef<str>) {
        if !self.output.quiet {
            eprintln!("{}", message.as_ref());
        }
    }

    pub fn print_list<T>(&self, result: &ListResult<T>) -> Result<()>
    where
        T: ResourceDisplay + Serialize,
    {
        let verbose = self.output.verbose;
        let text = with_formatter!(self.output.format, |f| f.format_list(result, verbose))?;
        output_result(&text, &self.output)
    }

    pub fn print_item<T>(&self, item: &T) -> Result<()>
    where
        T: ResourceDisplay + Serialize,
    {
        self.print_item_with(item, self.output.verbose)
    }

    /// Like `print_item` but with an explicit column set.
    pub fn print_item_with<T>(&self, item: &T, verbose: bool) -> Result<()>
    where
        T: ResourceDisplay + Serialize,
    {
        let text = with_formatter!(self.output.format, |f| f.format_item(item, verbose))?;
        output_result(&text, &self.output)
    }

    pub fn print_add_outcomes(&self, outcomes: &[AddOutcome]) -> Result<()> {
        let text = with_formatter!(self.output.format, |f| f.format_add_outcomes(outcomes))?;
        output_result(&text, &self.output)
    }

    pub fn print_outcome(&self, outcome: &UpdateOutcome, summary: &str) -> Result<()> {
        let text = with_formatter!(self.output.format, |f| f
            .format_update_outcome(outcome, summary))?;
        output_result(&text, &self.output)
    }

    pub fn print_outcomes(&self, outcomes: &[UpdateOutcome], summary: &str) -> Result<()> {
        let text = with_formatter!(self.output.format, |f| f
            .format_update_outcomes(outcomes, summary))?;
        output_result(&text, &self.output)
    }

    pub fn print_count(&self, what: &str, count: u64) -> Result<()> {
        let text = with_formatter!(self.output.format, |f| f.format_count(what, count))?;
        output_result(&text, &self.output)
    }
}

/// Turn the first failed add outcome into an error carrying its status.
pub(crate) fn ensure_added(outcomes: &[AddOutcome], url: &str) -> Result<()> {
    first_failure(
        outcomes.iter().map(|o| (o.status_code, o.message.as_deref())),
        outcomes.len(),
        url,
        "added",
    )
}

/// Turn the first failed update outcome into an error carrying its status.
pub(crate) fn ensure_updated(outcomes: &[UpdateOutcome], url: &str) -> Result<()> {
    first_failure(
        outcomes.iter().map(|o| (o.status_code, o.message.as_deref())),
        outcomes.len(),
        url,
        "updated",
    )
}

fn first_failure<'a>(
    outcomes: impl Iterator<Item = (u16, Option<&'a str>)>,
    total: usize,
    url: &str,
    verb: &str,
) -> Result<()> {
    let failures: Vec<(u16, Option<&str>)> = outcomes
        .filter(|(status, _)| !(200..300).contains(status))
        .collect();

    match failures.first() {
        None => Ok(()),
        Some((status, message)) => {
            let err = ClientError::Remote {
                status: *status,
                url: url.to_string(),
                message: message.unwrap_or_default().to_string(),
            };
            Err(anyhow::Error::new(err).context(format!(
                "{} of {} items were not {}",
                failures.len(),
                total,
                verb
            )))
        }
    }
}

/// Capitalize the first letter, for messages such as "Device 'x' deleted."
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse an age such as `90`, `30s`, `15m`, `2h` or `7d`; a bare number is seconds.
pub fn parse_age(value: &str) -> std::result::Result<Duration, String> {
    let value = value.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(split);

    if digits.is_empty() {
        return Err(format!("invalid age '{}': expected a number with optional s/m/h/d suffix", value));
    }
    let amount: u64 = digits
        .parse()
        .map_err(|_| format!("invalid age '{}': number out of range", value))?;

    let multiplier = match unit {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        other => return Err(format!("invalid age unit '{}': use s, m, h or d", other)),
    };

    amount
        .checked_mul(multiplier)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("invalid age '{}': number out of range", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExitCode, ExitCodeExt};

    #[test]
    fn test_parse_age_units() {
        assert_eq!(parse_age("90"), Ok(Duration::from_secs(90)));
        assert_eq!(parse_age("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_age("15m"), Ok(Duration::from_secs(900)));
        assert_eq!(parse_age("2h"), Ok(Duration::from_secs(7200)));
        assert_eq!(parse_age("7d"), Ok(Duration::from_secs(604_800)));
    }

    #[test]
    fn test_parse_age_rejects_garbage() {
        assert!(parse_age("").is_err());
        assert!(parse_age("h").is_err());
        assert!(parse_age("10w").is_err());
        assert!(parse_age("-5").is_err());
        assert!(parse_age("99999999999999999999d").is_err());
    }

    #[test]
    fn test_ensure_added_reports_first_failure_status() {
        let outcomes = vec![
            AddOutcome {
                status_code: 201,
                id: Some("a".into()),
                ..Default::default()
            },
            AddOutcome {
                status_code: 409,
                message: Some("name already exists".into()),
                ..Default::default()
            },
        ];

        let err = ensure_added(&outcomes, "http://localhost:59881/api/v2/device").unwrap_err();
        assert!(format!("{:#}", err).contains("1 of 2 items were not added"));
        assert!(format!("{:#}", err).contains("already exists"));
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_ensure_updated_accepts_all_success() {
        let outcomes = vec![UpdateOutcome {
            status_code: 200,
            ..Default::default()
        }];
        assert!(ensure_updated(&outcomes, "u").is_ok());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("device service"), "Device service");
        assert_eq!(capitalize(""), "");
    }
}
