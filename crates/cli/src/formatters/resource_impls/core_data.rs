//! core-data models.
//!
//! An event in verbose mode takes one row per reading; the event columns
//! are only filled on its first row.

use edgex_client::models::{Event, Reading};

use crate::formatters::ResourceDisplay;
use crate::formatters::common::{DEFAULT_MISSING_VALUE, format_missing, format_nanos};

impl ResourceDisplay for Event {
    const PLURAL: &'static str = "events";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec!["ID", "DEVICE", "SOURCE", "ORIGIN", "RESOURCE", "VALUE", "VALUE TYPE"]
        } else {
            vec!["ID", "DEVICE", "PROFILE", "SOURCE", "ORIGIN", "READINGS"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        let id = format_missing(self.id.as_deref());
        let origin = format_nanos(self.origin);

        if !verbose {
            return vec![vec![
                id,
                self.device_name.clone(),
                self.profile_name.clone(),
                self.source_name.clone(),
                origin,
                self.readings.len().to_string(),
            ]];
        }

        let event_cells = [id, self.device_name.clone(), self.source_name.clone(), origin];
        if self.readings.is_empty() {
            let mut row = event_cells.to_vec();
            row.extend([DEFAULT_MISSING_VALUE.to_string(), String::new(), String::new()]);
            return vec![row];
        }

        self.readings
            .iter()
            .enumerate()
            .map(|(i, reading)| {
                let mut row = if i == 0 {
                    event_cells.to_vec()
                } else {
                    vec![String::new(); event_cells.len()]
                };
                row.extend([
                    reading.resource_name.clone(),
                    format_missing(Some(&reading.value)),
                    reading.value_type.clone(),
                ]);
                row
            })
            .collect()
    }
}

impl ResourceDisplay for Reading {
    const PLURAL: &'static str = "readings";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec!["ID", "DEVICE", "PROFILE", "RESOURCE", "VALUE", "VALUE TYPE", "UNITS", "ORIGIN"]
        } else {
            vec!["DEVICE", "RESOURCE", "VALUE", "VALUE TYPE", "ORIGIN"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        let row = if verbose {
            vec![
                format_missing(self.id.as_deref()),
                self.device_name.clone(),
                self.profile_name.clone(),
                self.resource_name.clone(),
                format_missing(Some(&self.value)),
                self.value_type.clone(),
                format_missing(Some(&self.units)),
                format_nanos(self.origin),
            ]
        } else {
            vec![
                self.device_name.clone(),
                self.resource_name.clone(),
                format_missing(Some(&self.value)),
                self.value_type.clone(),
                format_nanos(self.origin),
            ]
        };
        vec![row]
    }
}
