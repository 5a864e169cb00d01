//! Device command (core-command) implementation.
//!
//! Responsibilities:
//! - List the commands each device exposes.
//! - Issue read (GET) commands and print the returned readings.
//! - Issue write (SET) commands with a JSON body of resource values.
//!
//! Invariants:
//! - A write body is a non-empty JSON object mapping resource names to values.
//! - Read results are shown with one row per reading regardless of `--verbose`.

use anyhow::Result;
use clap::{ArgGroup, Subcommand};
use std::path::PathBuf;
use tracing::info;

use super::CommandContext;
use crate::args::ListArgs;
use crate::input::{InputError, parse_command_body};

#[derive(Debug, Subcommand)]
pub enum DeviceCommandCommand {
    /// List device commands
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only the commands of this device
        #[arg(short, long)]
        device: Option<String>,
    },

    /// Issue a read command and show the returned readings
    Read {
        /// Device name
        #[arg(short, long)]
        device: String,

        /// Command name
        #[arg(short, long)]
        command: String,

        /// Ask the device service to also push the event to core-data
        #[arg(short, long)]
        push_event: bool,
    },

    /// Issue a write command
    #[command(group(ArgGroup::new("values").required(true).args(["body", "file"])))]
    Write {
        /// Device name
        #[arg(short, long)]
        device: String,

        /// Command name
        #[arg(short, long)]
        command: String,

        /// Resource values as a JSON object, e.g. '{"Int16":"42"}'
        #[arg(short, long)]
        body: Option<String>,

        /// File holding the JSON object of resource values
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

pub async fn run(ctx: &CommandContext, command: DeviceCommandCommand) -> Result<()> {
    match command {
        DeviceCommandCommand::List { list, device } => {
            run_list(ctx, &list, device.as_deref()).await
        }
        DeviceCommandCommand::Read {
            device,
            command,
            push_event,
        } => run_read(ctx, &device, &command, push_event).await,
        DeviceCommandCommand::Write {
            device,
            command,
            body,
            file,
        } => {
            let text = match (body, file) {
                (Some(body), _) => body,
                (None, Some(path)) => {
                    std::fs::read_to_string(&path).map_err(|source| InputError::Read {
                        path: path.clone(),
                        source,
                    })?
                }
                (None, None) => {
                    return Err(InputError::Invalid("pass --body or --file".to_string()).into());
                }
            };
            run_write(ctx, &device, &command, &text).await
        }
    }
}

async fn run_list(ctx: &CommandContext, list: &ListArgs, device: Option<&str>) -> Result<()> {
    if let Some(device) = device {
        info!("Fetching commands of device '{}'", device);
        let commands = ctx
            .run(
                format!("Fetching commands of '{}'", device),
                ctx.client.device_commands(device),
            )
            .await?;
        return ctx.print_item(&commands);
    }

    let query = list.query()?;
    info!("Listing device commands");

    let result = ctx
        .run(
            "Fetching device commands",
            ctx.client.list_device_commands(&query),
        )
        .await?;
    ctx.print_list(&result)
}

async fn run_read(ctx: &CommandContext, device: &str, command: &str, push_event: bool) -> Result<()> {
    info!(
        "Issuing read command '{}' on '{}' (push_event={})",
        command, device, push_event
    );

    let event = ctx
        .run(
            format!("Reading {} from {}", command, device),
            ctx.client.issue_get_command(device, command, push_event),
        )
        .await?;

    match event {
        Some(event) => ctx.print_item_with(&event, true),
        None => {
            ctx.notice(format!(
                "Command '{}' on device '{}' returned no event.",
                command, device
            ));
            Ok(())
        }
    }
}

async fn run_write(ctx: &CommandContext, device: &str, command: &str, text: &str) -> Result<()> {
    let values = parse_command_body(text)?;
    info!(
        "Issuing write command '{}' on '{}' with {} value(s)",
        command,
        device,
        values.len()
    );

    let outcome = ctx
        .run(
            format!("Writing {} to {}", command, device),
            ctx.client.issue_set_command(device, command, &values),
        )
        .await?;

    ctx.print_outcome(
        &outcome,
        &format!("Command '{}' sent to device '{}'.", command, device),
    )
}
