//! Scheduler models: intervals and the actions they trigger.

use serde::{Deserialize, Serialize};

use super::common::{Address, AdminState, Extra, Validate, require, require_identity};
use crate::error::Result;

/// A named schedule in support-scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Start time in `YYYYMMDD'T'HHmmss` form.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end: String,
    /// Period such as `10s` or `1h`.
    pub interval: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Validate for Interval {
    fn validate(&self) -> Result<()> {
        require("interval", "name", &self.name)?;
        require("interval", "interval", &self.interval)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

impl Validate for UpdateInterval {
    fn validate(&self) -> Result<()> {
        require_identity("interval", self.name.as_deref(), self.id.as_deref())
    }
}

impl From<Interval> for UpdateInterval {
    fn from(interval: Interval) -> Self {
        Self {
            id: interval.id,
            name: Some(interval.name),
            start: Some(interval.start),
            end: Some(interval.end),
            interval: Some(interval.interval),
        }
    }
}

/// Work performed each time an interval fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub interval_name: String,
    pub address: Address,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    pub admin_state: AdminState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Validate for IntervalAction {
    fn validate(&self) -> Result<()> {
        require("interval action", "name", &self.name)?;
        require("interval action", "intervalName", &self.interval_name)?;
        require("interval action", "address.type", &self.address.address_type)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntervalAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state: Option<AdminState>,
}

impl Validate for UpdateIntervalAction {
    fn validate(&self) -> Result<()> {
        require_identity("interval action", self.name.as_deref(), self.id.as_deref())
    }
}

impl From<IntervalAction> for UpdateIntervalAction {
    fn from(action: IntervalAction) -> Self {
        Self {
            id: action.id,
            name: Some(action.name),
            interval_name: Some(action.interval_name),
            address: Some(action.address),
            content: Some(action.content),
            content_type: Some(action.content_type),
            admin_state: Some(action.admin_state),
        }
    }
}
