//! Event and reading models for core-data.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::common::{Extra, Validate, require};
use crate::error::Result;

/// A set of readings captured from one device source at one moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub device_name: String,
    pub profile_name: String,
    pub source_name: String,
    /// Capture time in nanoseconds since the Unix epoch.
    #[serde(default)]
    pub origin: i64,
    #[serde(default)]
    pub readings: Vec<Reading>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Validate for Event {
    fn validate(&self) -> Result<()> {
        require("event", "deviceName", &self.device_name)?;
        require("event", "profileName", &self.profile_name)?;
        require("event", "sourceName", &self.source_name)?;
        for reading in &self.readings {
            reading.validate()?;
        }
        Ok(())
    }
}

/// One value read from a device resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub origin: i64,
    pub device_name: String,
    pub resource_name: String,
    pub profile_name: String,
    pub value_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub units: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Validate for Reading {
    fn validate(&self) -> Result<()> {
        require("reading", "resourceName", &self.resource_name)?;
        require("reading", "valueType", &self.value_type)
    }
}
