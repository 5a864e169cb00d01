//! support-notifications models.

use edgex_client::models::{Notification, Subscription, Transmission};

use crate::formatters::ResourceDisplay;
use crate::formatters::common::{format_list, format_millis, format_missing, format_missing_display};

impl ResourceDisplay for Notification {
    const PLURAL: &'static str = "notifications";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec![
                "ID",
                "CATEGORY",
                "SEVERITY",
                "STATUS",
                "SENDER",
                "CONTENT",
                "LABELS",
                "DESCRIPTION",
                "CREATED",
                "MODIFIED",
            ]
        } else {
            vec!["ID", "CATEGORY", "SEVERITY", "STATUS", "SENDER", "CONTENT"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        let mut row = vec![
            format_missing(self.id.as_deref()),
            format_missing(Some(&self.category)),
            self.severity.clone(),
            format_missing(Some(&self.status)),
            self.sender.clone(),
            self.content.clone(),
        ];
        if verbose {
            row.extend([
                format_list(&self.labels),
                format_missing(Some(&self.description)),
                format_millis(self.created),
                format_millis(self.modified),
            ]);
        }
        vec![row]
    }
}

impl ResourceDisplay for Subscription {
    const PLURAL: &'static str = "subscriptions";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec![
                "NAME",
                "RECEIVER",
                "CHANNELS",
                "CATEGORIES",
                "LABELS",
                "ADMIN STATE",
                "RESEND LIMIT",
                "RESEND INTERVAL",
                "ID",
                "CREATED",
                "MODIFIED",
            ]
        } else {
            vec!["NAME", "RECEIVER", "CHANNELS", "CATEGORIES", "LABELS", "ADMIN STATE"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        let channels: Vec<String> = self.channels.iter().map(|c| c.to_string()).collect();
        let mut row = vec![
            self.name.clone(),
            self.receiver.clone(),
            format_list(&channels),
            format_list(&self.categories),
            format_list(&self.labels),
            self.admin_state.to_string(),
        ];
        if verbose {
            row.extend([
                format_missing_display(self.resend_limit),
                format_missing(Some(&self.resend_interval)),
                format_missing(self.id.as_deref()),
                format_millis(self.created),
                format_millis(self.modified),
            ]);
        }
        vec![row]
    }
}

impl ResourceDisplay for Transmission {
    const PLURAL: &'static str = "transmissions";

    fn headers(verbose: bool) -> Vec<&'static str> {
        if verbose {
            vec![
                "ID",
                "NOTIFICATION",
                "SUBSCRIPTION",
                "CHANNEL",
                "STATUS",
                "RESENDS",
                "RECORDS",
                "CREATED",
            ]
        } else {
            vec!["ID", "NOTIFICATION", "SUBSCRIPTION", "STATUS", "RESENDS"]
        }
    }

    fn row_data(&self, verbose: bool) -> Vec<Vec<String>> {
        let row = if verbose {
            vec![
                format_missing(self.id.as_deref()),
                self.notification_id.clone(),
                self.subscription_name.clone(),
                self.channel.to_string(),
                self.status.clone(),
                self.resend_count.to_string(),
                self.records.len().to_string(),
                format_millis(self.created),
            ]
        } else {
            vec![
                format_missing(self.id.as_deref()),
                self.notification_id.clone(),
                self.subscription_name.clone(),
                self.status.clone(),
                self.resend_count.to_string(),
            ]
        };
        vec![row]
    }
}
