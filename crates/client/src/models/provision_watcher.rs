//! Provision watcher models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::common::{AdminState, AutoEvent, Extra, Validate, require, require_identity};
use crate::error::Result;

/// Rule that auto-registers discovered devices matching its identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionWatcher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub identifiers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub blocking_identifiers: BTreeMap<String, Vec<String>>,
    pub profile_name: String,
    pub service_name: String,
    pub admin_state: AdminState,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auto_events: Vec<AutoEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Validate for ProvisionWatcher {
    fn validate(&self) -> Result<()> {
        require("provision watcher", "name", &self.name)?;
        require("provision watcher", "profileName", &self.profile_name)?;
        require("provision watcher", "serviceName", &self.service_name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProvisionWatcher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocking_identifiers: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state: Option<AdminState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_events: Option<Vec<AutoEvent>>,
}

impl Validate for UpdateProvisionWatcher {
    fn validate(&self) -> Result<()> {
        require_identity("provision watcher", self.name.as_deref(), self.id.as_deref())
    }
}

impl From<ProvisionWatcher> for UpdateProvisionWatcher {
    fn from(watcher: ProvisionWatcher) -> Self {
        Self {
            id: watcher.id,
            name: Some(watcher.name),
            labels: Some(watcher.labels),
            identifiers: Some(watcher.identifiers),
            blocking_identifiers: Some(watcher.blocking_identifiers),
            profile_name: Some(watcher.profile_name),
            service_name: Some(watcher.service_name),
            admin_state: Some(watcher.admin_state),
            auto_events: Some(watcher.auto_events),
        }
    }
}
