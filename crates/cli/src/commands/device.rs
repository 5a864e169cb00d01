//! Device command implementation.
//!
//! Responsibilities:
//! - List devices, optionally by profile or by device service.
//! - Show, add, update and delete devices.
//! - Check whether a device exists.
//!
//! Does NOT handle:
//! - Issuing device commands (see `device_command`).
//!
//! Invariants:
//! - `--profile` and `--service` are mutually exclusive.
//! - Field flags on `update` build a partial update; unset fields are not sent.

use anyhow::Result;
use clap::{ArgGroup, Args, Subcommand};
use edgex_client::ClientError;
use edgex_client::models::{AdminState, Device, OperatingState, UpdateDevice};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

use super::{CommandContext, crud};
use crate::args::ListArgs;
use crate::formatters::{OutputFormat, output_result};
use crate::input::InputError;

#[derive(Debug, Subcommand)]
pub enum DeviceCommand {
    /// List devices
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only devices created from this profile
        #[arg(short, long, conflicts_with = "service")]
        profile: Option<String>,

        /// Only devices owned by this device service
        #[arg(short, long)]
        service: Option<String>,
    },

    /// Show one device by name
    Name {
        /// Device name
        #[arg(short, long)]
        name: String,
    },

    /// Add devices from a JSON or YAML file (an array or a single object)
    Add {
        /// Input file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Update devices from a file, with field flags, or in $EDITOR
    Update(DeviceUpdateArgs),

    /// Delete a device by name
    Rm {
        /// Device name
        #[arg(short, long)]
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Check whether a device exists (exit code 4 when it does not)
    Exists {
        /// Device name
        #[arg(short, long)]
        name: String,
    },
}

#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "name"])))]
pub struct DeviceUpdateArgs {
    /// File of partial updates; each entry names its device by name or id
    #[arg(short, long, conflicts_with_all = ["edit", "admin_state", "operating_state", "description", "labels"])]
    pub file: Option<PathBuf>,

    /// Name of the device to update
    #[arg(short, long)]
    pub name: Option<String>,

    /// Open the current device as JSON in $EDITOR and send the result
    #[arg(short, long, requires = "name", conflicts_with_all = ["admin_state", "operating_state", "description", "labels"])]
    pub edit: bool,

    /// New administrative state (LOCKED or UNLOCKED)
    #[arg(long, requires = "name")]
    pub admin_state: Option<AdminState>,

    /// New operating state (UP, DOWN or UNKNOWN)
    #[arg(long, requires = "name")]
    pub operating_state: Option<OperatingState>,

    /// New description
    #[arg(long, requires = "name")]
    pub description: Option<String>,

    /// Replace the labels (comma-separated)
    #[arg(long, requires = "name", value_delimiter = ',')]
    pub labels: Option<Vec<String>>,
}

impl DeviceUpdateArgs {
    /// Partial update from the field flags, or `None` when no field flag is set.
    fn field_update(&self, name: &str) -> Option<UpdateDevice> {
        if self.admin_state.is_none()
            && self.operating_state.is_none()
            && self.description.is_none()
            && self.labels.is_none()
        {
            return None;
        }

        Some(UpdateDevice {
            name: Some(name.to_string()),
            admin_state: self.admin_state,
            operating_state: self.operating_state,
            description: self.description.clone(),
            labels: self.labels.clone(),
            ..Default::default()
        })
    }
}

pub async fn run(ctx: &CommandContext, command: DeviceCommand) -> Result<()> {
    match command {
        DeviceCommand::List {
            list,
            profile,
            service,
        } => run_list(ctx, &list, profile.as_deref(), service.as_deref()).await,
        DeviceCommand::Name { name } => crud::show_by_name::<Device>(ctx, &name).await,
        DeviceCommand::Add { file } => crud::add_from_file::<Device>(ctx, &file).await,
        DeviceCommand::Update(args) => run_update(ctx, &args).await,
        DeviceCommand::Rm { name, force } => {
            crud::delete_by_name::<Device>(ctx, &name, force).await
        }
        DeviceCommand::Exists { name } => run_exists(ctx, &name).await,
    }
}

async fn run_list(
    ctx: &CommandContext,
    list: &ListArgs,
    profile: Option<&str>,
    service: Option<&str>,
) -> Result<()> {
    let query = list.query()?;

    let result = match (profile, service) {
        (Some(profile), _) => {
            info!("Listing devices of profile '{}'", profile);
            ctx.run(
                "Fetching devices",
                ctx.client.list_devices_by_profile(profile, &query),
            )
            .await?
        }
        (None, Some(service)) => {
            info!("Listing devices of service '{}'", service);
            ctx.run(
                "Fetching devices",
                ctx.client.list_devices_by_service(service, &query),
            )
            .await?
        }
        (None, None) => return crud::run_list::<Device>(ctx, list).await,
    };

    ctx.print_list(&result)
}

async fn run_update(ctx: &CommandContext, args: &DeviceUpdateArgs) -> Result<()> {
    if let Some(file) = &args.file {
        return crud::update_from_file::<Device>(ctx, file).await;
    }

    let Some(name) = args.name.as_deref() else {
        return Err(InputError::Invalid("pass --file or --name".to_string()).into());
    };

    if args.edit {
        return crud::edit_by_name::<Device>(ctx, name).await;
    }

    match args.field_update(name) {
        Some(update) => crud::send_one_update::<Device>(ctx, name, &update).await,
        None => Err(InputError::Invalid(
            "nothing to update: pass --edit or at least one of --admin-state, --operating-state, --description, --labels"
                .to_string(),
        )
        .into()),
    }
}

async fn run_exists(ctx: &CommandContext, name: &str) -> Result<()> {
    info!("Checking device '{}'", name);

    let exists = ctx
        .run(
            format!("Checking device '{}'", name),
            ctx.client.device_exists(name),
        )
        .await?;

    if !exists {
        return Err(ClientError::NotFound(format!("device '{}'", name)).into());
    }

    let text = match ctx.output.format {
        OutputFormat::Json => format!(
            "{}\n",
            serde_json::to_string_pretty(&json!({ "name": name, "exists": true }))?
        ),
        OutputFormat::Table => format!("Device '{}' exists.\n", name),
    };
    output_result(&text, &ctx.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> DeviceUpdateArgs {
        DeviceUpdateArgs {
            file: None,
            name: Some("Random-Integer-Device".into()),
            edit: false,
            admin_state: None,
            operating_state: None,
            description: None,
            labels: None,
        }
    }

    #[test]
    fn test_field_update_requires_a_field() {
        assert!(args().field_update("Random-Integer-Device").is_none());
    }

    #[test]
    fn test_field_update_sends_only_set_fields() {
        let update = DeviceUpdateArgs {
            admin_state: Some(AdminState::Locked),
            ..args()
        }
        .field_update("Random-Integer-Device")
        .unwrap();

        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["name"], "Random-Integer-Device");
        assert_eq!(body["adminState"], "LOCKED");
        assert!(body.get("description").is_none());
        assert!(body.get("labels").is_none());
    }
}
