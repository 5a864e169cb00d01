//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Define argument groups shared by several resources (paging, service selection).
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `main`); EDGEX_* variables are read by
//!   the config loader, not by clap.

use clap::{Args, Parser, Subcommand};
use edgex_client::{Limit, ListQuery};
use edgex_config::ServiceName;
use edgex_config::constants::DEFAULT_LIST_LIMIT;
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "edgex-cli")]
#[command(about = "EdgeX CLI - Manage EdgeX Foundry deployments from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  edgex-cli ping\n  edgex-cli device list --limit -1\n  edgex-cli device name --name Random-Integer-Device\n  edgex-cli --json event list --device Random-Integer-Device\n  edgex-cli command read --device Random-Integer-Device --command Int16\n  edgex-cli db purge --force\n"
)]
pub struct Cli {
    /// Host shared by every EdgeX service (overrides EDGEX_HOST and the config file)
    #[arg(long, global = true, value_name = "HOST")]
    pub host: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Path to a custom configuration file (overrides EDGEX_CLI_CONFIG and the default location)
    #[arg(long, global = true, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Print raw JSON instead of a table
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Show the extended column set in tables
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Page output through $PAGER (default: less)
    #[arg(long, global = true, conflicts_with = "output_file")]
    pub pager: bool,

    /// Suppress progress output and confirmation messages on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log every request on stderr (same as RUST_LOG=debug)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage devices (core-metadata)
    Device {
        #[command(subcommand)]
        command: commands::device::DeviceCommand,
    },

    /// Manage device services (core-metadata)
    #[command(name = "deviceservice")]
    DeviceService {
        #[command(subcommand)]
        command: commands::crud::CrudCommand,
    },

    /// Manage device profiles (core-metadata)
    #[command(name = "deviceprofile")]
    DeviceProfile {
        #[command(subcommand)]
        command: commands::device_profile::DeviceProfileCommand,
    },

    /// Manage provision watchers (core-metadata)
    #[command(name = "provisionwatcher")]
    ProvisionWatcher {
        #[command(subcommand)]
        command: commands::crud::CrudCommand,
    },

    /// Query, add and remove events (core-data)
    Event {
        #[command(subcommand)]
        command: commands::event::EventCommand,
    },

    /// Query readings (core-data)
    Reading {
        #[command(subcommand)]
        command: commands::reading::ReadingCommand,
    },

    /// List and issue device commands (core-command)
    Command {
        #[command(subcommand)]
        command: commands::device_command::DeviceCommandCommand,
    },

    /// Manage intervals (support-scheduler)
    Interval {
        #[command(subcommand)]
        command: commands::crud::CrudCommand,
    },

    /// Manage interval actions (support-scheduler)
    #[command(name = "intervalaction")]
    IntervalAction {
        #[command(subcommand)]
        command: commands::crud::CrudCommand,
    },

    /// Manage notifications (support-notifications)
    Notification {
        #[command(subcommand)]
        command: commands::notification::NotificationCommand,
    },

    /// Manage subscriptions (support-notifications)
    Subscription {
        #[command(subcommand)]
        command: commands::subscription::SubscriptionCommand,
    },

    /// Query and prune transmissions (support-notifications)
    Transmission {
        #[command(subcommand)]
        command: commands::transmission::TransmissionCommand,
    },

    /// Check that the selected services respond
    Ping(ServiceSelector),

    /// Show the running configuration of the selected services
    Config(ServiceSelector),

    /// Show runtime metrics of the selected services
    Metrics(ServiceSelector),

    /// Show the version of the selected services
    Version(ServiceSelector),

    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: commands::db::DbCommand,
    },
}

/// Paging and label flags shared by every list command.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Number of items to skip
    #[arg(short, long, default_value_t = 0)]
    pub offset: usize,

    /// Maximum number of items to return (-1 returns every remaining item)
    #[arg(short, long, default_value_t = DEFAULT_LIST_LIMIT, allow_hyphen_values = true)]
    pub limit: i64,

    /// Only return items carrying these labels (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub labels: Vec<String>,
}

impl ListArgs {
    /// Convert to a client query; limits below -1 are rejected here.
    pub fn query(&self) -> edgex_client::Result<ListQuery> {
        let limit = Limit::try_from(self.limit)?;
        Ok(ListQuery::new(self.offset, limit).with_labels(self.labels.clone()))
    }
}

/// Service flags of the ping, config, metrics and version commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ServiceSelector {
    /// core-metadata
    #[arg(short = 'M', long)]
    pub metadata: bool,

    /// core-data
    #[arg(short = 'D', long)]
    pub data: bool,

    /// core-command
    #[arg(short = 'C', long = "command")]
    pub core_command: bool,

    /// support-scheduler
    #[arg(short = 'S', long)]
    pub scheduler: bool,

    /// support-notifications
    #[arg(short = 'N', long)]
    pub notifications: bool,
}

impl ServiceSelector {
    /// Selected services in registry order; none selected means all of them.
    pub fn services(&self) -> Vec<ServiceName> {
        let selected: Vec<ServiceName> = ServiceName::ALL
            .into_iter()
            .filter(|service| match service {
                ServiceName::CoreMetadata => self.metadata,
                ServiceName::CoreData => self.data,
                ServiceName::CoreCommand => self.core_command,
                ServiceName::SupportScheduler => self.scheduler,
                ServiceName::SupportNotifications => self.notifications,
            })
            .collect();

        if selected.is_empty() {
            ServiceName::ALL.to_vec()
        } else {
            selected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_selector_means_every_service() {
        assert_eq!(ServiceSelector::default().services(), ServiceName::ALL.to_vec());
    }

    #[test]
    fn test_selector_keeps_registry_order() {
        let selector = ServiceSelector {
            notifications: true,
            data: true,
            ..Default::default()
        };
        assert_eq!(
            selector.services(),
            vec![ServiceName::CoreData, ServiceName::SupportNotifications]
        );
    }

    #[test]
    fn test_negative_limit_parses_and_minus_one_means_all() {
        let cli = Cli::try_parse_from(["edgex-cli", "device", "list", "--limit", "-1"]).unwrap();
        let Commands::Device {
            command: commands::device::DeviceCommand::List { list, .. },
        } = cli.command
        else {
            panic!("expected device list");
        };
        assert_eq!(list.query().unwrap().limit, Limit::All);
    }

    #[test]
    fn test_limit_below_minus_one_rejected() {
        let args = ListArgs {
            offset: 0,
            limit: -2,
            labels: vec![],
        };
        assert!(args.query().is_err());
    }

    #[test]
    fn test_labels_split_on_comma() {
        let cli = Cli::try_parse_from([
            "edgex-cli",
            "interval",
            "list",
            "--labels",
            "a,b",
        ])
        .unwrap();
        let Commands::Interval {
            command: commands::crud::CrudCommand::List(list),
        } = cli.command
        else {
            panic!("expected interval list");
        };
        assert_eq!(list.labels, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_resource_names_are_single_words() {
        for name in ["deviceservice", "deviceprofile", "provisionwatcher", "intervalaction"] {
            let parsed = Cli::try_parse_from(["edgex-cli", name, "list"]);
            assert!(parsed.is_ok(), "{name} should parse");
        }
    }
}
