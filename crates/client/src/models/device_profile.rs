//! Device profile models.
//!
//! Resources and commands are modelled down to the fields the tables show;
//! everything else is carried through `extra` so that profiles survive a
//! fetch, edit and update cycle unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::common::{Extra, Validate, require, require_identity};
use crate::error::Result;

/// A device profile registered with core-metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub manufacturer: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub device_resources: Vec<DeviceResource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_commands: Vec<DeviceCommand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Validate for DeviceProfile {
    fn validate(&self) -> Result<()> {
        require("device profile", "name", &self.name)?;
        for resource in &self.device_resources {
            require("device resource", "name", &resource.name)?;
            require(
                "device resource",
                "properties.valueType",
                &resource.properties.value_type,
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResource {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub is_hidden: bool,
    pub properties: ResourceProperties,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceProperties {
    pub value_type: String,
    pub read_write: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub units: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCommand {
    pub name: String,
    #[serde(default)]
    pub is_hidden: bool,
    pub read_write: String,
    #[serde(default)]
    pub resource_operations: Vec<ResourceOperation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOperation {
    pub device_resource: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, String>,
}

/// Update of the descriptive fields of a profile (`PATCH /deviceprofile/basicinfo`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceProfileBasicInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl Validate for UpdateDeviceProfileBasicInfo {
    fn validate(&self) -> Result<()> {
        require_identity("device profile", self.name.as_deref(), self.id.as_deref())
    }
}

impl From<DeviceProfile> for UpdateDeviceProfileBasicInfo {
    fn from(profile: DeviceProfile) -> Self {
        Self {
            id: profile.id,
            name: Some(profile.name),
            description: Some(profile.description),
            manufacturer: Some(profile.manufacturer),
            model: Some(profile.model),
            labels: Some(profile.labels),
        }
    }
}
