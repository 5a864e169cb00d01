//! Transmission command implementation.

use anyhow::Result;
use clap::{ArgGroup, Subcommand};
use edgex_client::models::Transmission;
use std::time::Duration;
use tracing::info;

use super::{CommandContext, crud, parse_age};
use crate::args::ListArgs;
use crate::interactive::confirm;

#[derive(Debug, Subcommand)]
pub enum TransmissionCommand {
    /// List transmissions
    #[command(group(ArgGroup::new("filter").args(["status", "notification_id"])))]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only transmissions with this status (ACKNOWLEDGED, FAILED, SENT, ESCALATED, RESENDING)
        #[arg(short, long)]
        status: Option<String>,

        /// Only transmissions of this notification
        #[arg(short, long)]
        notification_id: Option<String>,
    },

    /// Show one transmission by id
    Id {
        /// Transmission id
        #[arg(short, long)]
        id: String,
    },

    /// Delete processed transmissions older than an age
    Rm {
        /// Age, e.g. 90, 30s, 15m, 2h, 7d
        #[arg(short, long, value_parser = parse_age)]
        age: Duration,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(ctx: &CommandContext, command: TransmissionCommand) -> Result<()> {
    match command {
        TransmissionCommand::List {
            list,
            status,
            notification_id,
        } => run_list(ctx, &list, status.as_deref(), notification_id.as_deref()).await,
        TransmissionCommand::Id { id } => crud::show_by_id::<Transmission>(ctx, &id).await,
        TransmissionCommand::Rm { age, force } => run_delete_by_age(ctx, age, force).await,
    }
}

async fn run_list(
    ctx: &CommandContext,
    list: &ListArgs,
    status: Option<&str>,
    notification_id: Option<&str>,
) -> Result<()> {
    let query = list.query()?;

    let result = match (status, notification_id) {
        (Some(status), _) => {
            info!("Listing transmissions with status {}", status);
            ctx.run(
                "Fetching transmissions",
                ctx.client.list_transmissions_by_status(status, &query),
            )
            .await?
        }
        (None, Some(id)) => {
            info!("Listing transmissions of notification {}", id);
            ctx.run(
                "Fetching transmissions",
                ctx.client.list_transmissions_by_notification(id, &query),
            )
            .await?
        }
        (None, None) => return crud::run_list::<Transmission>(ctx, list).await,
    };

    ctx.print_list(&result)
}

async fn run_delete_by_age(ctx: &CommandContext, age: Duration, force: bool) -> Result<()> {
    if !force
        && !confirm(&format!(
            "Are you sure you want to delete transmissions older than {}s?",
            age.as_secs()
        ))?
    {
        return Ok(());
    }

    info!("Deleting transmissions older than {}s", age.as_secs());

    let outcome = ctx
        .run(
            "Deleting old transmissions",
            ctx.client.delete_transmissions_older_than(age),
        )
        .await?;
    ctx.print_outcome(
        &outcome,
        &format!("Transmissions older than {}s deleted.", age.as_secs()),
    )
}
