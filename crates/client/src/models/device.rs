//! Device models for the core-metadata device API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::common::{
    AdminState, AutoEvent, Extra, OperatingState, Validate, require, require_identity,
};
use crate::error::Result;
use crate::serde_helpers::present_or_null;

/// Protocol name to its connection properties, e.g. `{"modbus-tcp": {"Address": "10.0.0.2"}}`.
pub type Protocols = BTreeMap<String, BTreeMap<String, Value>>;

/// A device registered with core-metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub admin_state: AdminState,
    pub operating_state: OperatingState,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    pub service_name: String,
    pub profile_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auto_events: Vec<AutoEvent>,
    #[serde(default)]
    pub protocols: Protocols,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Validate for Device {
    fn validate(&self) -> Result<()> {
        require("device", "name", &self.name)?;
        require("device", "serviceName", &self.service_name)?;
        require("device", "profileName", &self.profile_name)
    }
}

/// Partial device update; `None` fields are left unchanged on the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDevice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state: Option<AdminState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_state: Option<OperatingState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// `Some(Value::Null)` clears the location; `None` leaves it unchanged.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_events: Option<Vec<AutoEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Protocols>,
}

impl Validate for UpdateDevice {
    fn validate(&self) -> Result<()> {
        require_identity("device", self.name.as_deref(), self.id.as_deref())
    }
}

impl From<Device> for UpdateDevice {
    /// Full replacement of every mutable field, used by `update --edit`.
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            name: Some(device.name),
            description: Some(device.description),
            admin_state: Some(device.admin_state),
            operating_state: Some(device.operating_state),
            labels: Some(device.labels),
            location: device.location,
            service_name: Some(device.service_name),
            profile_name: Some(device.profile_name),
            auto_events: Some(device.auto_events),
            protocols: Some(device.protocols),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_device_deserializes_edgex_payload() {
        let device: Device = serde_json::from_value(json!({
            "created": 1700000000000i64,
            "modified": 1700000000000i64,
            "id": "6e8a1c2d-0000-4000-8000-000000000001",
            "name": "Random-Integer-Device",
            "description": "Example of Device Virtual",
            "adminState": "UNLOCKED",
            "operatingState": "UP",
            "labels": ["device-virtual-example"],
            "serviceName": "device-virtual",
            "profileName": "Random-Integer-Device",
            "autoEvents": [{"interval": "15s", "onChange": false, "sourceName": "Int8"}],
            "protocols": {"other": {"Address": "device-virtual-int-01", "Protocol": "300"}}
        }))
        .unwrap();

        assert_eq!(device.name, "Random-Integer-Device");
        assert_eq!(device.admin_state, AdminState::Unlocked);
        assert_eq!(device.auto_events[0].interval, "15s");
        assert_eq!(device.protocols["other"]["Protocol"], "300");
    }

    #[test]
    fn test_update_serializes_only_set_fields() {
        let update = UpdateDevice {
            name: Some("sensor-1".to_string()),
            admin_state: Some(AdminState::Locked),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"name": "sensor-1", "adminState": "LOCKED"})
        );
    }

    #[test]
    fn test_update_keeps_explicit_location_clear() {
        let update: UpdateDevice =
            serde_json::from_value(json!({"name": "sensor-1", "location": null})).unwrap();
        assert_eq!(update.location, Some(Value::Null));
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"name": "sensor-1", "location": null})
        );

        let untouched: UpdateDevice = serde_json::from_value(json!({"name": "sensor-1"})).unwrap();
        assert_eq!(untouched.location, None);
        assert_eq!(
            serde_json::to_value(&untouched).unwrap(),
            json!({"name": "sensor-1"})
        );
    }

    #[test]
    fn test_validation_requires_service_and_profile() {
        let mut device: Device = serde_json::from_value(json!({
            "name": "d1",
            "adminState": "UNLOCKED",
            "operatingState": "UP",
            "serviceName": "",
            "profileName": "p"
        }))
        .unwrap();
        assert!(device.validate().unwrap_err().to_string().contains("serviceName"));
        device.service_name = "svc".to_string();
        assert!(device.validate().is_ok());
    }
}
