//! support-scheduler models.

use edgex_client::models::{Interval, IntervalAction};

use crate::formatters::ResourceDisplay;
use crate::formatters::common::{format_millis, format_missing};

impl ResourceDisplay for Interval {
    const PLURAL: &'static str = "intervals";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec!["NAME", "INTERVAL", "START", "END", "ID", "CREATED", "MODIFIED"]
        } else {
            vec!["NAME", "INTERVAL", "START", "END"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        let mut row = vec![
            self.name.clone(),
            self.interval.clone(),
            format_missing(Some(&self.start)),
            format_missing(Some(&self.end)),
        ];
        if verbose {
            row.extend([
                format_missing(self.id.as_deref()),
                format_millis(self.created),
                format_millis(self.modified),
            ]);
        }
        vec![row]
    }
}

impl ResourceDisplay for IntervalAction {
    const PLURAL: &'static str = "interval actions";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec![
                "NAME",
                "INTERVAL",
                "ADDRESS",
                "ADMIN STATE",
                "CONTENT TYPE",
                "CONTENT",
                "ID",
                "CREATED",
                "MODIFIED",
            ]
        } else {
            vec!["NAME", "INTERVAL", "ADDRESS", "ADMIN STATE"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        let mut row = vec![
            self.name.clone(),
            self.interval_name.clone(),
            self.address.to_string(),
            self.admin_state.to_string(),
        ];
        if verbose {
            row.extend([
                format_missing(Some(&self.content_type)),
                format_missing(Some(&self.content)),
                format_missing(self.id.as_deref()),
                format_millis(self.created),
                format_millis(self.modified),
            ]);
        }
        vec![row]
    }
}
