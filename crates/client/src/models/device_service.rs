//! Device service models.

use serde::{Deserialize, Serialize};

use super::common::{AdminState, Extra, Validate, require, require_identity};
use crate::error::Result;

/// A device service registered with core-metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub base_address: String,
    pub admin_state: AdminState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Validate for DeviceService {
    fn validate(&self) -> Result<()> {
        require("device service", "name", &self.name)?;
        require("device service", "baseAddress", &self.base_address)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state: Option<AdminState>,
}

impl Validate for UpdateDeviceService {
    fn validate(&self) -> Result<()> {
        require_identity("device service", self.name.as_deref(), self.id.as_deref())
    }
}

impl From<DeviceService> for UpdateDeviceService {
    fn from(service: DeviceService) -> Self {
        Self {
            id: service.id,
            name: Some(service.name),
            description: Some(service.description),
            labels: Some(service.labels),
            base_address: Some(service.base_address),
            admin_state: Some(service.admin_state),
        }
    }
}
