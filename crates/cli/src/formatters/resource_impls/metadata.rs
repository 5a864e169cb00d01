//! core-metadata models: devices, device services, device profiles, provision watchers.

use edgex_client::models::{Device, DeviceProfile, DeviceService, ProvisionWatcher};

use crate::formatters::ResourceDisplay;
use crate::formatters::common::{format_list, format_millis, format_missing};

impl ResourceDisplay for Device {
    const PLURAL: &'static str = "devices";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec![
                "NAME",
                "DESCRIPTION",
                "ADMIN STATE",
                "OPERATING STATE",
                "PROFILE",
                "SERVICE",
                "LABELS",
                "AUTO EVENTS",
                "ID",
                "CREATED",
                "MODIFIED",
            ]
        } else {
            vec!["NAME", "DESCRIPTION", "ADMIN STATE", "OPERATING STATE", "PROFILE", "SERVICE"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        let mut row = vec![
            self.name.clone(),
            format_missing(Some(&self.description)),
            self.admin_state.to_string(),
            self.operating_state.to_string(),
            self.profile_name.clone(),
            self.service_name.clone(),
        ];
        if verbose {
            let auto_events: Vec<String> = self
                .auto_events
                .iter()
                .map(|ae| format!("{}@{}", ae.source_name, ae.interval))
                .collect();
            row.extend([
                format_list(&self.labels),
                format_list(&auto_events),
                format_missing(self.id.as_deref()),
                format_millis(self.created),
                format_millis(self.modified),
            ]);
        }
        vec![row]
    }
}

impl ResourceDisplay for DeviceService {
    const PLURAL: &'static str = "device services";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec!["NAME", "BASE ADDRESS", "ADMIN STATE", "DESCRIPTION", "LABELS", "ID", "CREATED", "MODIFIED"]
        } else {
            vec!["NAME", "BASE ADDRESS", "ADMIN STATE", "DESCRIPTION"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        let mut row = vec![
            self.name.clone(),
            self.base_address.clone(),
            self.admin_state.to_string(),
            format_missing(Some(&self.description)),
        ];
        if verbose {
            row.extend([
                format_list(&self.labels),
                format_missing(self.id.as_deref()),
                format_millis(self.created),
                format_millis(self.modified),
            ]);
        }
        vec![row]
    }
}

impl ResourceDisplay for DeviceProfile {
    const PLURAL: &'static str = "device profiles";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec![
                "NAME",
                "MANUFACTURER",
                "MODEL",
                "DESCRIPTION",
                "RESOURCES",
                "COMMANDS",
                "LABELS",
                "ID",
                "CREATED",
                "MODIFIED",
            ]
        } else {
            vec!["NAME", "MANUFACTURER", "MODEL", "DESCRIPTION"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        let mut row = vec![
            self.name.clone(),
            format_missing(Some(&self.manufacturer)),
            format_missing(Some(&self.model)),
            format_missing(Some(&self.description)),
        ];
        if verbose {
            let resources: Vec<String> =
                self.device_resources.iter().map(|r| r.name.clone()).collect();
            let commands: Vec<String> =
                self.device_commands.iter().map(|c| c.name.clone()).collect();
            row.extend([
                format_list(&resources),
                format_list(&commands),
                format_list(&self.labels),
                format_missing(self.id.as_deref()),
                format_millis(self.created),
                format_millis(self.modified),
            ]);
        }
        vec![row]
    }
}

impl ResourceDisplay for ProvisionWatcher {
    const PLURAL: &'static str = "provision watchers";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec![
                "NAME",
                "PROFILE",
                "SERVICE",
                "ADMIN STATE",
                "IDENTIFIERS",
                "LABELS",
                "ID",
                "CREATED",
                "MODIFIED",
            ]
        } else {
            vec!["NAME", "PROFILE", "SERVICE", "ADMIN STATE"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        let mut row = vec![
            self.name.clone(),
            self.profile_name.clone(),
            self.service_name.clone(),
            self.admin_state.to_string(),
        ];
        if verbose {
            let identifiers: Vec<String> = self
                .identifiers
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            row.extend([
                format_list(&identifiers),
                format_list(&self.labels),
                format_missing(self.id.as_deref()),
                format_millis(self.created),
                format_millis(self.modified),
            ]);
        }
        vec![row]
    }
}
