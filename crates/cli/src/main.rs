//! EdgeX CLI - Command-line interface for EdgeX Foundry v2 deployments.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute EdgeX REST API calls via the shared client library.
//! - Format and display results as aligned tables or JSON.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Any local state: nothing is cached or persisted between runs.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible to the loader.
//! - Logs go to stderr; stdout is reserved for command output.
//! - Commands run one at a time on a single-threaded runtime.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod input;
mod interactive;
mod progress;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use edgex_config::ConfigLoader;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file BEFORE CLI parsing so EDGEX_* values from it are honored
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    // Usage errors exit with the validation code; --help and --version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::ValidationError.as_i32()
            } else {
                ExitCode::Success.as_i32()
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(ExitCode::ValidationError.as_i32());
        }
    };

    // Create cancellation token and set up signal handling
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Defaults, then the config file, then environment, then command-line overrides.
fn load_config(cli: &Cli) -> anyhow::Result<edgex_config::Config> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored to allow fallback to EDGEX_CLI_CONFIG
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader.from_file()?.from_env()?;

    if let Some(ref host) = cli.host {
        loader = loader.with_host(host.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }

    Ok(loader.build()?)
}
