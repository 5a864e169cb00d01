//! Support-notifications models: notifications, subscriptions and transmissions.

use serde::{Deserialize, Serialize};

use super::common::{Address, AdminState, Extra, Validate, require, require_identity};
use crate::error::{ClientError, Result};

/// Notification severities accepted by support-notifications.
pub const SEVERITIES: [&str; 3] = ["MINOR", "NORMAL", "CRITICAL"];

/// Notification processing states.
pub const NOTIFICATION_STATUSES: [&str; 3] = ["NEW", "PROCESSED", "ESCALATED"];

/// Transmission delivery states.
pub const TRANSMISSION_STATUSES: [&str; 5] =
    ["ACKNOWLEDGED", "FAILED", "SENT", "ESCALATED", "RESENDING"];

/// Check `value` against a fixed set of upper-case states.
pub fn ensure_member(kind: &str, value: &str, allowed: &[&str]) -> Result<String> {
    let upper = value.trim().to_ascii_uppercase();
    if allowed.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(ClientError::validation(format!(
            "invalid {kind} '{value}': expected one of {}",
            allowed.join(", ")
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub sender: String,
    pub severity: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Validate for Notification {
    fn validate(&self) -> Result<()> {
        require("notification", "content", &self.content)?;
        require("notification", "sender", &self.sender)?;
        ensure_member("severity", &self.severity, &SEVERITIES)?;
        if self.category.trim().is_empty() && self.labels.is_empty() {
            return Err(ClientError::validation(
                "notification requires a category or at least one label",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub channels: Vec<Address>,
    pub receiver: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resend_limit: Option<i64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resend_interval: String,
    pub admin_state: AdminState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Validate for Subscription {
    fn validate(&self) -> Result<()> {
        require("subscription", "name", &self.name)?;
        require("subscription", "receiver", &self.receiver)?;
        if self.channels.is_empty() {
            return Err(ClientError::validation(
                "subscription requires at least one channel",
            ));
        }
        if self.categories.is_empty() && self.labels.is_empty() {
            return Err(ClientError::validation(
                "subscription requires at least one category or label",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<Address>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resend_limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resend_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state: Option<AdminState>,
}

impl Validate for UpdateSubscription {
    fn validate(&self) -> Result<()> {
        require_identity("subscription", self.name.as_deref(), self.id.as_deref())
    }
}

impl From<Subscription> for UpdateSubscription {
    fn from(sub: Subscription) -> Self {
        Self {
            id: sub.id,
            name: Some(sub.name),
            channels: Some(sub.channels),
            receiver: Some(sub.receiver),
            categories: Some(sub.categories),
            labels: Some(sub.labels),
            description: Some(sub.description),
            resend_limit: sub.resend_limit,
            resend_interval: Some(sub.resend_interval),
            admin_state: Some(sub.admin_state),
        }
    }
}

/// Delivery attempt history of one notification to one subscription channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    pub notification_id: String,
    pub subscription_name: String,
    pub channel: Address,
    pub status: String,
    #[serde(default)]
    pub resend_count: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<TransmissionRecord>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Validate for Transmission {
    fn validate(&self) -> Result<()> {
        Err(ClientError::validation(
            "transmissions are created by support-notifications and cannot be added",
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransmissionRecord {
    pub status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub response: String,
    #[serde(default)]
    pub sent: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ensure_member_normalizes_case() {
        assert_eq!(
            ensure_member("status", "processed", &NOTIFICATION_STATUSES).unwrap(),
            "PROCESSED"
        );
        let err = ensure_member("status", "DONE", &NOTIFICATION_STATUSES).unwrap_err();
        assert!(err.to_string().contains("ESCALATED"));
    }

    #[test]
    fn test_notification_requires_category_or_label() {
        let notification: Notification = serde_json::from_value(json!({
            "content": "disk full",
            "sender": "ops",
            "severity": "CRITICAL"
        }))
        .unwrap();
        assert!(notification.validate().is_err());
    }

    #[test]
    fn test_transmission_deserializes_records() {
        let transmission: Transmission = serde_json::from_value(json!({
            "id": "t1",
            "created": 1700000000000i64,
            "notificationId": "n1",
            "subscriptionName": "ops-email",
            "channel": {"type": "EMAIL", "recipients": ["ops@example.com"]},
            "status": "FAILED",
            "resendCount": 2,
            "records": [{"status": "FAILED", "response": "timeout", "sent": 1700000000001i64}]
        }))
        .unwrap();
        assert_eq!(transmission.records[0].response, "timeout");
        assert_eq!(transmission.channel.to_string(), "EMAIL");
    }
}
