//! Reading command implementation.
//!
//! Lists, counts and shows readings held by core-data. `--device` and
//! `--resource` narrow a listing; they cannot be combined.

use anyhow::Result;
use clap::Subcommand;
use edgex_client::models::Reading;
use tracing::info;

use super::{CommandContext, crud};
use crate::args::ListArgs;

#[derive(Debug, Subcommand)]
pub enum ReadingCommand {
    /// List readings, newest first
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only readings from this device
        #[arg(short, long, conflicts_with = "resource")]
        device: Option<String>,

        /// Only readings of this device resource
        #[arg(short, long)]
        resource: Option<String>,
    },

    /// Count readings
    Count {
        /// Only count readings from this device
        #[arg(short, long)]
        device: Option<String>,
    },

    /// Show one reading by id
    Id {
        /// Reading id
        #[arg(short, long)]
        id: String,
    },
}

pub async fn run(ctx: &CommandContext, command: ReadingCommand) -> Result<()> {
    match command {
        ReadingCommand::List {
            list,
            device,
            resource,
        } => run_list(ctx, &list, device.as_deref(), resource.as_deref()).await,
        ReadingCommand::Count { device } => run_count(ctx, device.as_deref()).await,
        ReadingCommand::Id { id } => crud::show_by_id::<Reading>(ctx, &id).await,
    }
}

async fn run_list(
    ctx: &CommandContext,
    list: &ListArgs,
    device: Option<&str>,
    resource: Option<&str>,
) -> Result<()> {
    let query = list.query()?;

    let result = match (device, resource) {
        (Some(device), _) => {
            info!("Listing readings of device '{}'", device);
            ctx.run(
                "Fetching readings",
                ctx.client.list_readings_by_device(device, &query),
            )
            .await?
        }
        (None, Some(resource)) => {
            info!("Listing readings of resource '{}'", resource);
            ctx.run(
                "Fetching readings",
                ctx.client.list_readings_by_resource(resource, &query),
            )
            .await?
        }
        (None, None) => return crud::run_list::<Reading>(ctx, list).await,
    };

    ctx.print_list(&result)
}

async fn run_count(ctx: &CommandContext, device: Option<&str>) -> Result<()> {
    let count = match device {
        Some(device) => {
            info!("Counting readings of device '{}'", device);
            ctx.run(
                "Counting readings",
                ctx.client.count_readings_by_device(device),
            )
            .await?
        }
        None => {
            info!("Counting readings");
            ctx.run("Counting readings", ctx.client.count_readings())
                .await?
        }
    };
    ctx.print_count("Readings", count)
}
