//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the EdgeX client and output options from the loaded configuration.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Every handler receives the same `CommandContext` and cancellation token.
//! - Resources without resource-specific flags go through `commands::crud`.

use anyhow::Result;
use edgex_client::EdgexClient;
use edgex_client::models::{DeviceService, Interval, IntervalAction, ProvisionWatcher};
use tracing::debug;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands::system::SystemQuery;
use crate::commands::{self, CommandContext};
use crate::formatters::{OutputFormat, OutputOptions};

/// Dispatch CLI commands to their respective handlers.
///
/// # Arguments
/// * `cli` - The parsed CLI arguments
/// * `config` - The fully layered configuration
/// * `cancel_token` - Token for cancellation support
pub(crate) async fn run_command(
    cli: Cli,
    config: edgex_config::Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let client = EdgexClient::builder().from_config(&config).build()?;
    debug!(
        core_metadata = %config.registry.endpoint(edgex_config::ServiceName::CoreMetadata).base_url(),
        timeout_secs = config.timeout.as_secs(),
        "Client configured"
    );

    let output = OutputOptions {
        format: OutputFormat::from_json_flag(cli.json),
        verbose: cli.verbose,
        output_file: cli.output_file,
        pager: cli.pager,
        quiet: cli.quiet,
    };
    let ctx = CommandContext::new(client, output, cancel_token.clone());

    match cli.command {
        Commands::Device { command } => commands::device::run(&ctx, command).await,
        Commands::DeviceService { command } => {
            commands::crud::run::<DeviceService>(&ctx, command).await
        }
        Commands::DeviceProfile { command } => commands::device_profile::run(&ctx, command).await,
        Commands::ProvisionWatcher { command } => {
            commands::crud::run::<ProvisionWatcher>(&ctx, command).await
        }
        Commands::Event { command } => commands::event::run(&ctx, command).await,
        Commands::Reading { command } => commands::reading::run(&ctx, command).await,
        Commands::Command { command } => commands::device_command::run(&ctx, command).await,
        Commands::Interval { command } => commands::crud::run::<Interval>(&ctx, command).await,
        Commands::IntervalAction { command } => {
            commands::crud::run::<IntervalAction>(&ctx, command).await
        }
        Commands::Notification { command } => commands::notification::run(&ctx, command).await,
        Commands::Subscription { command } => commands::subscription::run(&ctx, command).await,
        Commands::Transmission { command } => commands::transmission::run(&ctx, command).await,
        Commands::Ping(selector) => commands::system::run(&ctx, SystemQuery::Ping, &selector).await,
        Commands::Config(selector) => {
            commands::system::run(&ctx, SystemQuery::Config, &selector).await
        }
        Commands::Metrics(selector) => {
            commands::system::run(&ctx, SystemQuery::Metrics, &selector).await
        }
        Commands::Version(selector) => {
            commands::system::run(&ctx, SystemQuery::Version, &selector).await
        }
        Commands::Db { command } => commands::db::run(&ctx, command).await,
    }
}
