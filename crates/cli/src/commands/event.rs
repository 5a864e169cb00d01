//! Event command implementation.
//!
//! Responsibilities:
//! - List and count events, for all devices or one device.
//! - Show one event by id and add events from a file.
//! - Delete events by id, by device, or by age.
//!
//! Does NOT handle:
//! - Reading-level queries (see `reading`).
//!
//! Invariants:
//! - Exactly one of `--id`, `--device` and `--age` selects what `rm` deletes.
//! - Every delete asks for confirmation unless `--force` is passed.

use anyhow::Result;
use clap::{ArgGroup, Subcommand};
use edgex_client::models::{AddOutcome, Event};
use edgex_client::{ClientError, Resource};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use super::{CommandContext, crud, ensure_added, parse_age};
use crate::args::ListArgs;
use crate::input::read_items;
use crate::interactive::confirm;

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// List events, newest first
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only events from this device
        #[arg(short, long)]
        device: Option<String>,
    },

    /// Count events
    Count {
        /// Only count events from this device
        #[arg(short, long)]
        device: Option<String>,
    },

    /// Show one event by id
    Id {
        /// Event id
        #[arg(short, long)]
        id: String,
    },

    /// Add events (with their readings) from a JSON or YAML file
    Add {
        /// Input file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete events by id, by device, or by age
    #[command(group(ArgGroup::new("target").required(true).args(["id", "device", "age"])))]
    Rm {
        /// Event id
        #[arg(short, long)]
        id: Option<String>,

        /// Delete every event from this device
        #[arg(short, long)]
        device: Option<String>,

        /// Delete events older than this age (e.g. 90, 30s, 15m, 2h, 7d)
        #[arg(short, long, value_parser = parse_age)]
        age: Option<Duration>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(ctx: &CommandContext, command: EventCommand) -> Result<()> {
    match command {
        EventCommand::List { list, device } => run_list(ctx, &list, device.as_deref()).await,
        EventCommand::Count { device } => run_count(ctx, device.as_deref()).await,
        EventCommand::Id { id } => crud::show_by_id::<Event>(ctx, &id).await,
        EventCommand::Add { file } => run_add(ctx, &file).await,
        EventCommand::Rm {
            id,
            device,
            age,
            force,
        } => {
            if let Some(id) = id {
                crud::delete_by_id::<Event>(ctx, &id, force).await
            } else if let Some(device) = device {
                run_delete_by_device(ctx, &device, force).await
            } else if let Some(age) = age {
                run_delete_by_age(ctx, age, force).await
            } else {
                Ok(())
            }
        }
    }
}

async fn run_list(ctx: &CommandContext, list: &ListArgs, device: Option<&str>) -> Result<()> {
    let Some(device) = device else {
        return crud::run_list::<Event>(ctx, list).await;
    };

    let query = list.query()?;
    info!("Listing events of device '{}'", device);

    let result = ctx
        .run(
            "Fetching events",
            ctx.client.list_events_by_device(device, &query),
        )
        .await?;
    ctx.print_list(&result)
}

async fn run_count(ctx: &CommandContext, device: Option<&str>) -> Result<()> {
    let count = match device {
        Some(device) => {
            info!("Counting events of device '{}'", device);
            ctx.run("Counting events", ctx.client.count_events_by_device(device))
                .await?
        }
        None => {
            info!("Counting events");
            ctx.run("Counting events", ctx.client.count_events()).await?
        }
    };
    ctx.print_count("Events", count)
}

async fn run_add(ctx: &CommandContext, path: &Path) -> Result<()> {
    let events: Vec<Event> = read_items(path, Event::DISPLAY_NAME)?;
    info!("Adding {} event(s)", events.len());

    let mut outcomes = Vec::with_capacity(events.len());
    for event in &events {
        let result = ctx
            .run(
                format!("Adding event from '{}'", event.device_name),
                ctx.client.add_event(event),
            )
            .await;
        outcomes.push(rejected_as_outcome(result)?);
    }

    ctx.print_add_outcomes(&outcomes)?;
    let url = ctx.client.url(Event::SERVICE, Event::ROUTE)?;
    ensure_added(&outcomes, url.as_str())
}

/// Keep going past per-event rejections so every outcome is reported.
fn rejected_as_outcome(result: Result<AddOutcome>) -> Result<AddOutcome> {
    match result {
        Ok(outcome) => Ok(outcome),
        Err(err) => match err.downcast::<ClientError>() {
            Ok(ClientError::Remote {
                status, message, ..
            }) => Ok(AddOutcome {
                status_code: status,
                message: Some(message),
                ..Default::default()
            }),
            Ok(other) => Err(other.into()),
            Err(err) => Err(err),
        },
    }
}

async fn run_delete_by_device(ctx: &CommandContext, device: &str, force: bool) -> Result<()> {
    if !force
        && !confirm(&format!(
            "Are you sure you want to delete every event of device '{}'?",
            device
        ))?
    {
        return Ok(());
    }

    info!("Deleting events of device '{}'", device);

    let outcome = ctx
        .run(
            format!("Deleting events of '{}'", device),
            ctx.client.delete_events_by_device(device),
        )
        .await?;
    ctx.print_outcome(&outcome, &format!("Events of device '{}' deleted.", device))
}

async fn run_delete_by_age(ctx: &CommandContext, age: Duration, force: bool) -> Result<()> {
    if !force
        && !confirm(&format!(
            "Are you sure you want to delete events older than {}s?",
            age.as_secs()
        ))?
    {
        return Ok(());
    }

    info!("Deleting events older than {}s", age.as_secs());

    let outcome = ctx
        .run("Deleting old events", ctx.client.delete_events_older_than(age))
        .await?;
    ctx.print_outcome(
        &outcome,
        &format!("Events older than {}s deleted.", age.as_secs()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_rejection_becomes_outcome() {
        let err = anyhow::Error::new(ClientError::Remote {
            status: 404,
            url: "http://localhost:59880/api/v2/event/p/d/s".into(),
            message: "device not found".into(),
        });

        let outcome = rejected_as_outcome(Err(err)).unwrap();
        assert_eq!(outcome.status_code, 404);
        assert_eq!(outcome.message.as_deref(), Some("device not found"));
    }

    #[test]
    fn test_transport_style_errors_still_abort() {
        let err = anyhow::Error::new(ClientError::InvalidUrl("http://".into()));
        assert!(rejected_as_outcome(Err(err)).is_err());
    }
}
