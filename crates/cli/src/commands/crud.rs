//! Generic list/show/add/update/delete handlers.
//!
//! Responsibilities:
//! - Define `CrudCommand`, the subcommand set of every resource without
//!   resource-specific flags (device services, provision watchers,
//!   intervals, interval actions).
//! - Provide the generic handlers the resource-specific modules reuse.
//!
//! Does NOT handle:
//! - Routes outside the generic name/id pattern (see the resource modules).
//!
//! Invariants:
//! - Deletes ask for confirmation unless `--force` is passed.
//! - A bulk add or update that partly fails prints every outcome, then
//!   fails with the status of the first failed item.

use anyhow::Result;
use clap::{ArgGroup, Args, Subcommand};
use edgex_client::Resource;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{CommandContext, capitalize, ensure_added, ensure_updated};
use crate::args::ListArgs;
use crate::formatters::ResourceDisplay;
use crate::input::{InputError, read_items};
use crate::interactive::{confirm_delete, edit_in_editor};

#[derive(Debug, Subcommand)]
pub enum CrudCommand {
    /// List items
    List(ListArgs),

    /// Show one item by name
    Name {
        /// Item name
        #[arg(short, long)]
        name: String,
    },

    /// Add items from a JSON or YAML file (an array or a single object)
    Add {
        /// Input file; `.yaml`/`.yml` is read as YAML, anything else as JSON
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Apply partial updates from a file, or edit one item in $EDITOR
    Update(UpdateArgs),

    /// Delete an item by name
    Rm {
        /// Item name
        #[arg(short, long)]
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Source of an update: a file of partial updates or an interactive edit.
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "name"])))]
pub struct UpdateArgs {
    /// File of partial updates; each entry names its target by name or id
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Name of the item to edit
    #[arg(short, long, requires = "edit")]
    pub name: Option<String>,

    /// Open the current item as JSON in $EDITOR and send the result
    #[arg(short, long, requires = "name")]
    pub edit: bool,
}

pub async fn run<R>(ctx: &CommandContext, command: CrudCommand) -> Result<()>
where
    R: Resource + ResourceDisplay,
    R::Update: From<R> + DeserializeOwned,
{
    match command {
        CrudCommand::List(list) => run_list::<R>(ctx, &list).await,
        CrudCommand::Name { name } => show_by_name::<R>(ctx, &name).await,
        CrudCommand::Add { file } => add_from_file::<R>(ctx, &file).await,
        CrudCommand::Update(args) => update::<R>(ctx, &args).await,
        CrudCommand::Rm { name, force } => delete_by_name::<R>(ctx, &name, force).await,
    }
}

pub async fn run_list<R>(ctx: &CommandContext, list: &ListArgs) -> Result<()>
where
    R: Resource + ResourceDisplay,
{
    let query = list.query()?;
    info!(
        "Listing {} (offset={}, limit={})",
        R::PLURAL,
        query.offset,
        list.limit
    );

    let result = ctx
        .run(
            format!("Fetching {}", R::PLURAL),
            ctx.client.resource::<R>().list(&query),
        )
        .await?;
    ctx.print_list(&result)
}

pub async fn show_by_name<R>(ctx: &CommandContext, name: &str) -> Result<()>
where
    R: Resource + ResourceDisplay,
{
    info!("Fetching {} '{}'", R::DISPLAY_NAME, name);

    let item = ctx
        .run(
            format!("Fetching {} '{}'", R::DISPLAY_NAME, name),
            ctx.client.resource::<R>().get_by_name(name),
        )
        .await?;
    ctx.print_item(&item)
}

pub async fn show_by_id<R>(ctx: &CommandContext, id: &str) -> Result<()>
where
    R: Resource + ResourceDisplay,
{
    info!("Fetching {} with id {}", R::DISPLAY_NAME, id);

    let item = ctx
        .run(
            format!("Fetching {} {}", R::DISPLAY_NAME, id),
            ctx.client.resource::<R>().get_by_id(id),
        )
        .await?;
    ctx.print_item(&item)
}

pub async fn add_from_file<R>(ctx: &CommandContext, path: &Path) -> Result<()>
where
    R: Resource,
{
    let items: Vec<R> = read_items(path, R::DISPLAY_NAME)?;
    add_items(ctx, &items).await
}

pub async fn add_items<R>(ctx: &CommandContext, items: &[R]) -> Result<()>
where
    R: Resource,
{
    info!("Adding {} {} item(s)", items.len(), R::DISPLAY_NAME);

    let outcomes = ctx
        .run(
            format!("Adding {} item(s)", items.len()),
            ctx.client.resource::<R>().add_many(items),
        )
        .await?;
    ctx.print_add_outcomes(&outcomes)?;

    let url = ctx.client.url(R::SERVICE, R::ROUTE)?;
    ensure_added(&outcomes, url.as_str())
}

pub async fn update<R>(ctx: &CommandContext, args: &UpdateArgs) -> Result<()>
where
    R: Resource,
    R::Update: From<R> + DeserializeOwned,
{
    match (&args.file, &args.name) {
        (Some(file), _) => update_from_file::<R>(ctx, file).await,
        (None, Some(name)) => edit_by_name::<R>(ctx, name).await,
        (None, None) => Err(InputError::Invalid("pass --file, or --name with --edit".to_string()).into()),
    }
}

pub async fn update_from_file<R>(ctx: &CommandContext, path: &Path) -> Result<()>
where
    R: Resource,
    R::Update: DeserializeOwned,
{
    let updates: Vec<R::Update> = read_items(path, R::DISPLAY_NAME)?;
    send_updates::<R>(ctx, &updates).await
}

pub async fn send_updates<R>(ctx: &CommandContext, updates: &[R::Update]) -> Result<()>
where
    R: Resource,
{
    info!("Updating {} {} item(s)", updates.len(), R::DISPLAY_NAME);

    let outcomes = ctx
        .run(
            format!("Updating {} item(s)", updates.len()),
            ctx.client.resource::<R>().update_many(updates),
        )
        .await?;

    let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
    let summary = format!(
        "Updated {} of {} {} item(s).",
        succeeded,
        outcomes.len(),
        R::DISPLAY_NAME
    );
    ctx.print_outcomes(&outcomes, &summary)?;

    let url = ctx.client.url(R::SERVICE, &R::update_path())?;
    ensure_updated(&outcomes, url.as_str())
}

/// Fetch the item, let the user edit it, and send every field back.
pub async fn edit_by_name<R>(ctx: &CommandContext, name: &str) -> Result<()>
where
    R: Resource,
    R::Update: From<R> + DeserializeOwned,
{
    let current = ctx
        .run(
            format!("Fetching {} '{}'", R::DISPLAY_NAME, name),
            ctx.client.resource::<R>().get_by_name(name),
        )
        .await?;

    let Some(edited) = edit_in_editor(&R::Update::from(current))? else {
        ctx.notice("Editor closed without saving; nothing was sent.");
        return Ok(());
    };

    send_one_update::<R>(ctx, name, &edited).await
}

pub async fn send_one_update<R>(ctx: &CommandContext, name: &str, update: &R::Update) -> Result<()>
where
    R: Resource,
{
    info!("Updating {} '{}'", R::DISPLAY_NAME, name);

    let outcome = ctx
        .run(
            format!("Updating {} '{}'", R::DISPLAY_NAME, name),
            ctx.client.resource::<R>().update(update),
        )
        .await?;

    let summary = format!("{} '{}' updated successfully.", capitalize(R::DISPLAY_NAME), name);
    ctx.print_outcome(&outcome, &summary)
}

pub async fn delete_by_name<R>(ctx: &CommandContext, name: &str, force: bool) -> Result<()>
where
    R: Resource,
{
    if !force && !confirm_delete(name, R::DISPLAY_NAME)? {
        return Ok(());
    }

    info!("Deleting {} '{}'", R::DISPLAY_NAME, name);

    let outcome = ctx
        .run(
            format!("Deleting {} '{}'", R::DISPLAY_NAME, name),
            ctx.client.resource::<R>().delete_by_name(name),
        )
        .await?;

    let summary = format!("{} '{}' deleted successfully.", capitalize(R::DISPLAY_NAME), name);
    ctx.print_outcome(&outcome, &summary)
}

pub async fn delete_by_id<R>(ctx: &CommandContext, id: &str, force: bool) -> Result<()>
where
    R: Resource,
{
    if !force && !confirm_delete(id, R::DISPLAY_NAME)? {
        return Ok(());
    }

    info!("Deleting {} with id {}", R::DISPLAY_NAME, id);

    let outcome = ctx
        .run(
            format!("Deleting {} {}", R::DISPLAY_NAME, id),
            ctx.client.resource::<R>().delete_by_id(id),
        )
        .await?;

    let summary = format!("{} '{}' deleted successfully.", capitalize(R::DISPLAY_NAME), id);
    ctx.print_outcome(&outcome, &summary)
}

