//! Device profile command implementation.
//!
//! Responsibilities:
//! - List, show, update and delete device profiles.
//! - Add profiles from JSON, or upload a YAML profile definition file.
//!
//! Invariants:
//! - A `.yaml`/`.yml` file is sent verbatim to the upload route; core-metadata
//!   parses it. Any other file is parsed here and sent as JSON.
//! - Updates only touch the basic info (description, manufacturer, model, labels).

use anyhow::{Context, Result};
use clap::Subcommand;
use edgex_client::models::DeviceProfile;
use std::path::{Path, PathBuf};
use tracing::info;

use super::crud::{self, UpdateArgs};
use super::CommandContext;
use crate::args::ListArgs;
use crate::input::{InputError, InputFormat};

#[derive(Debug, Subcommand)]
pub enum DeviceProfileCommand {
    /// List device profiles
    List(ListArgs),

    /// Show one device profile by name
    Name {
        /// Profile name
        #[arg(short, long)]
        name: String,
    },

    /// Add profiles from a JSON file, or upload a YAML profile definition
    Add {
        /// Input file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Update profile basic info from a file, or edit one profile in $EDITOR
    Update(UpdateArgs),

    /// Delete a device profile by name
    Rm {
        /// Profile name
        #[arg(short, long)]
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(ctx: &CommandContext, command: DeviceProfileCommand) -> Result<()> {
    match command {
        DeviceProfileCommand::List(list) => crud::run_list::<DeviceProfile>(ctx, &list).await,
        DeviceProfileCommand::Name { name } => {
            crud::show_by_name::<DeviceProfile>(ctx, &name).await
        }
        DeviceProfileCommand::Add { file } => run_add(ctx, &file).await,
        DeviceProfileCommand::Update(args) => crud::update::<DeviceProfile>(ctx, &args).await,
        DeviceProfileCommand::Rm { name, force } => {
            crud::delete_by_name::<DeviceProfile>(ctx, &name, force).await
        }
    }
}

async fn run_add(ctx: &CommandContext, path: &Path) -> Result<()> {
    if InputFormat::from_path(path) == InputFormat::Json {
        return crud::add_from_file::<DeviceProfile>(ctx, path).await;
    }

    let contents = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("profile file name is not valid UTF-8")?;

    info!("Uploading device profile file '{}'", file_name);

    let outcome = ctx
        .run(
            format!("Uploading {}", file_name),
            ctx.client.upload_device_profile(file_name, contents),
        )
        .await?;

    ctx.print_add_outcomes(std::slice::from_ref(&outcome))
}
