//! Notification command implementation.
//!
//! Responsibilities:
//! - List notifications by category, label or status (default: status NEW).
//! - Show, add and delete notifications.
//! - Prune processed notifications by age.

use anyhow::Result;
use clap::{ArgGroup, Subcommand};
use edgex_client::NotificationFilter;
use edgex_client::models::Notification;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::{CommandContext, crud, parse_age};
use crate::args::ListArgs;
use crate::interactive::confirm;

#[derive(Debug, Subcommand)]
pub enum NotificationCommand {
    /// List notifications (status NEW unless a filter is given)
    #[command(group(ArgGroup::new("filter").args(["category", "label", "status"])))]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only notifications of this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only notifications carrying this label
        #[arg(long)]
        label: Option<String>,

        /// Only notifications with this status (NEW, PROCESSED, ESCALATED)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Show one notification by id
    Id {
        /// Notification id
        #[arg(short, long)]
        id: String,
    },

    /// Add notifications from a JSON or YAML file
    Add {
        /// Input file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete a notification by id, or processed notifications by age
    #[command(group(ArgGroup::new("target").required(true).args(["id", "age"])))]
    Rm {
        /// Notification id
        #[arg(short, long)]
        id: Option<String>,

        /// Delete processed notifications older than this age (e.g. 90, 30s, 15m, 2h, 7d)
        #[arg(short, long, value_parser = parse_age)]
        age: Option<Duration>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(ctx: &CommandContext, command: NotificationCommand) -> Result<()> {
    match command {
        NotificationCommand::List {
            list,
            category,
            label,
            status,
        } => {
            let filter = category
                .map(NotificationFilter::Category)
                .or(label.map(NotificationFilter::Label))
                .or(status.map(NotificationFilter::Status));
            run_list(ctx, &list, filter).await
        }
        NotificationCommand::Id { id } => crud::show_by_id::<Notification>(ctx, &id).await,
        NotificationCommand::Add { file } => crud::add_from_file::<Notification>(ctx, &file).await,
        NotificationCommand::Rm { id, age, force } => match (id, age) {
            (Some(id), _) => crud::delete_by_id::<Notification>(ctx, &id, force).await,
            (None, Some(age)) => run_delete_by_age(ctx, age, force).await,
            (None, None) => Ok(()),
        },
    }
}

async fn run_list(
    ctx: &CommandContext,
    list: &ListArgs,
    filter: Option<NotificationFilter>,
) -> Result<()> {
    let Some(filter) = filter else {
        return crud::run_list::<Notification>(ctx, list).await;
    };

    let query = list.query()?;
    info!("Listing notifications ({:?})", filter);

    let result = ctx
        .run(
            "Fetching notifications",
            ctx.client.list_notifications(&filter, &query),
        )
        .await?;
    ctx.print_list(&result)
}

async fn run_delete_by_age(ctx: &CommandContext, age: Duration, force: bool) -> Result<()> {
    if !force
        && !confirm(&format!(
            "Are you sure you want to delete processed notifications older than {}s?",
            age.as_secs()
        ))?
    {
        return Ok(());
    }

    info!("Deleting notifications older than {}s", age.as_secs());

    let outcome = ctx
        .run(
            "Deleting old notifications",
            ctx.client.delete_notifications_older_than(age),
        )
        .await?;
    ctx.print_outcome(
        &outcome,
        &format!("Processed notifications older than {}s deleted.", age.as_secs()),
    )
}
