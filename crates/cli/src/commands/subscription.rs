//! Subscription command implementation.
//!
//! Generic CRUD plus listing by category, label or receiver.

use anyhow::Result;
use clap::{ArgGroup, Subcommand};
use edgex_client::SubscriptionFilter;
use edgex_client::models::Subscription;
use std::path::PathBuf;
use tracing::info;

use super::crud::{self, UpdateArgs};
use super::CommandContext;
use crate::args::ListArgs;

#[derive(Debug, Subcommand)]
pub enum SubscriptionCommand {
    /// List subscriptions
    #[command(group(ArgGroup::new("filter").args(["category", "label", "receiver"])))]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only subscriptions to this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only subscriptions to this label
        #[arg(long)]
        label: Option<String>,

        /// Only subscriptions of this receiver
        #[arg(short, long)]
        receiver: Option<String>,
    },

    /// Show one subscription by name
    Name {
        /// Subscription name
        #[arg(short, long)]
        name: String,
    },

    /// Add subscriptions from a JSON or YAML file
    Add {
        /// Input file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Apply partial updates from a file, or edit one subscription in $EDITOR
    Update(UpdateArgs),

    /// Delete a subscription by name
    Rm {
        /// Subscription name
        #[arg(short, long)]
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(ctx: &CommandContext, command: SubscriptionCommand) -> Result<()> {
    match command {
        SubscriptionCommand::List {
            list,
            category,
            label,
            receiver,
        } => {
            let filter = category
                .map(SubscriptionFilter::Category)
                .or(label.map(SubscriptionFilter::Label))
                .or(receiver.map(SubscriptionFilter::Receiver));
            run_list(ctx, &list, filter).await
        }
        SubscriptionCommand::Name { name } => crud::show_by_name::<Subscription>(ctx, &name).await,
        SubscriptionCommand::Add { file } => crud::add_from_file::<Subscription>(ctx, &file).await,
        SubscriptionCommand::Update(args) => crud::update::<Subscription>(ctx, &args).await,
        SubscriptionCommand::Rm { name, force } => {
            crud::delete_by_name::<Subscription>(ctx, &name, force).await
        }
    }
}

async fn run_list(
    ctx: &CommandContext,
    list: &ListArgs,
    filter: Option<SubscriptionFilter>,
) -> Result<()> {
    let Some(filter) = filter else {
        return crud::run_list::<Subscription>(ctx, list).await;
    };

    let query = list.query()?;
    info!("Listing subscriptions ({:?})", filter);

    let result = ctx
        .run(
            "Fetching subscriptions",
            ctx.client.list_subscriptions_by(&filter, &query),
        )
        .await?;
    ctx.print_list(&result)
}
