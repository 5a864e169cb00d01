//! Database maintenance commands.
//!
//! Responsibilities:
//! - `db purge`: delete every provision watcher, device, device profile,
//!   device service, interval action, interval and event, in that order.
//!
//! Invariants:
//! - Asks for confirmation unless `--force` is passed.
//! - Individual delete failures do not stop the purge; the summary lists
//!   them and the command exits non-zero.

use anyhow::{Result, bail};
use clap::Subcommand;
use edgex_client::{PurgeOrchestrator, PurgeStep};
use tracing::info;

use super::CommandContext;
use crate::formatters::{Formatter, output_result, with_formatter};
use crate::interactive::confirm;
use crate::progress::PurgeProgress;

#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Delete every item from core-metadata, support-scheduler and core-data
    Purge {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(ctx: &CommandContext, command: DbCommand) -> Result<()> {
    match command {
        DbCommand::Purge { force } => run_purge(ctx, force).await,
    }
}

async fn run_purge(ctx: &CommandContext, force: bool) -> Result<()> {
    let orchestrator = PurgeOrchestrator::new(&ctx.client);

    if !force {
        let targets: Vec<&str> = orchestrator.steps().iter().map(|s| s.label()).collect();
        let question = format!(
            "This deletes all {}. Are you sure?",
            targets.join(", ")
        );
        if !confirm(&question)? {
            return Ok(());
        }
    }

    info!("Purging {} resource types", orchestrator.steps().len());

    let mut progress = PurgeProgress::new(!ctx.output.quiet);
    let reports = ctx
        .cancel
        .run(async {
            Ok::<_, anyhow::Error>(orchestrator.run(|event| progress.handle(event)).await)
        })
        .await?;
    drop(progress);

    let text = with_formatter!(ctx.output.format, |f| f.format_purge_reports(&reports))?;
    output_result(&text, &ctx.output)?;

    let unclean: Vec<PurgeStep> = reports
        .iter()
        .filter(|r| !r.is_clean())
        .map(|r| r.resource)
        .collect();
    if !unclean.is_empty() {
        let names: Vec<&str> = unclean.iter().map(|s| s.label()).collect();
        bail!("purge incomplete for: {}", names.join(", "));
    }

    info!("Purge finished");
    Ok(())
}
