//! Core-command, system and outcome types.

use edgex_client::DeleteReport;
use edgex_client::models::{AddOutcome, DeviceCoreCommand, PingResponse, VersionResponse};

use crate::formatters::ResourceDisplay;
use crate::formatters::common::{
    DEFAULT_MISSING_VALUE, format_list, format_missing, format_missing_display,
};

/// One row per command; the device and profile only on the first.
impl ResourceDisplay for DeviceCoreCommand {
    const PLURAL: &'static str = "device commands";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec!["DEVICE", "PROFILE", "COMMAND", "ACCESS", "PARAMETERS", "URL"]
        } else {
            vec!["DEVICE", "PROFILE", "COMMAND", "ACCESS"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        if self.core_commands.is_empty() {
            return vec![vec![
                self.device_name.clone(),
                self.profile_name.clone(),
                DEFAULT_MISSING_VALUE.to_string(),
            ]];
        }

        self.core_commands
            .iter()
            .enumerate()
            .map(|(i, command)| {
                let mut row = if i == 0 {
                    vec![self.device_name.clone(), self.profile_name.clone()]
                } else {
                    vec![String::new(), String::new()]
                };
                row.push(command.name.clone());
                row.push(command.access().to_string());
                if verbose {
                    let params: Vec<String> = command
                        .parameters
                        .iter()
                        .map(|p| format!("{}:{}", p.resource_name, p.value_type))
                        .collect();
                    row.push(format_list(&params));
                    row.push(format!("{}{}", command.url, command.path));
                }
                row
            })
            .collect()
    }
}

impl ResourceDisplay for PingResponse {
    const PLURAL: &'static str = "services";

    fn headers(_verbose: bool) -> Vec<&'static str> {
        vec!["TIMESTAMP"]
    }

    fn row_data(&self, _verbose: bool) -> Vec<Vec<String>> {
        vec![vec![self.timestamp.clone()]]
    }
}

impl ResourceDisplay for VersionResponse {
    const PLURAL: &'static str = "services";

    fn headers(_verbose: bool) -> Vec<&'static str> {
        vec!["VERSION", "API"]
    }

    fn row_data(&self, _verbose: bool) -> Vec<Vec<String>> {
        vec![vec![self.version.clone(), format_missing(Some(&self.api_version))]]
    }
}

impl ResourceDisplay for AddOutcome {
    const PLURAL: &'static str = "results";

    fn headers(_verbose: bool) -> Vec<&'static str> {
        vec!["STATUS", "ID", "MESSAGE"]
    }

    fn row_data(&self, _verbose: bool) -> Vec<Vec<String>> {
        vec![vec![
            self.status_code.to_string(),
            format_missing(self.id.as_deref()),
            format_missing(self.message.as_deref()),
        ]]
    }
}

impl ResourceDisplay for DeleteReport {
    const PLURAL: &'static str = "resources";

    fn headers(_verbose: bool) -> Vec<&'static str> {
        vec!["RESOURCE", "ATTEMPTED", "SUCCEEDED", "FAILED", "LIST ERROR"]
    }

    fn row_data(&self, _verbose: bool) -> Vec<Vec<String>> {
        vec![vec![
            self.resource.to_string(),
            self.attempted.to_string(),
            self.succeeded.to_string(),
            self.failures.len().to_string(),
            format_missing_display(self.list_error.as_deref()),
        ]]
    }
}
