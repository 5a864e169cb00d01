//! Types shared by several EdgeX resources.
//!
//! This module holds the state enums, the address and auto-event shapes, the
//! multi-status response items and the `Validate` trait. It does NOT contain
//! resource-specific models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ClientError, Result};

/// Fields the server may add that this client does not model explicitly.
///
/// Kept so that `--json` output and file round-trips preserve them.
pub type Extra = BTreeMap<String, Value>;

/// Administrative state of a device, service or provision watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminState {
    Locked,
    Unlocked,
}

impl fmt::Display for AdminState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "LOCKED"),
            Self::Unlocked => write!(f, "UNLOCKED"),
        }
    }
}

impl FromStr for AdminState {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOCKED" => Ok(Self::Locked),
            "UNLOCKED" => Ok(Self::Unlocked),
            other => Err(ClientError::validation(format!(
                "invalid admin state '{other}': expected LOCKED or UNLOCKED"
            ))),
        }
    }
}

/// Operating state reported for a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatingState {
    Up,
    Down,
    Unknown,
}

impl fmt::Display for OperatingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "UP"),
            Self::Down => write!(f, "DOWN"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl FromStr for OperatingState {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UP" => Ok(Self::Up),
            "DOWN" => Ok(Self::Down),
            "UNKNOWN" => Ok(Self::Unknown),
            other => Err(ClientError::validation(format!(
                "invalid operating state '{other}': expected UP, DOWN or UNKNOWN"
            ))),
        }
    }
}

/// Delivery target used by interval actions and subscription channels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "type")]
    pub address_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.host.is_empty(), self.port) {
            (true, _) => write!(f, "{}", self.address_type),
            (false, Some(port)) => write!(f, "{}://{}:{}", self.address_type, self.host, port),
            (false, None) => write!(f, "{}://{}", self.address_type, self.host),
        }
    }
}

/// Periodic reading schedule attached to a device.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoEvent {
    pub interval: String,
    #[serde(default)]
    pub on_change: bool,
    pub source_name: String,
}

/// Basic response returned by updates and deletes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status_code: u16,
}

impl UpdateOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// One entry of the multi-status response to an add request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOutcome {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl AddOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Response of the `count` routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    #[serde(rename = "Count")]
    pub count: u64,
}

/// Client-side checks run before a request is built.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Fail with a validation error naming `field` when `value` is blank.
pub(crate) fn require(resource: &str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::validation(format!(
            "{resource} {field} must not be empty"
        )));
    }
    Ok(())
}

/// An update must name its target by name or by id.
pub(crate) fn require_identity(
    resource: &str,
    name: Option<&str>,
    id: Option<&str>,
) -> Result<()> {
    let has = |v: Option<&str>| v.is_some_and(|s| !s.trim().is_empty());
    if has(name) || has(id) {
        Ok(())
    } else {
        Err(ClientError::validation(format!(
            "{resource} update requires a name or an id"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_state_parses_case_insensitively() {
        assert_eq!("locked".parse::<AdminState>().unwrap(), AdminState::Locked);
        assert!("OPEN".parse::<AdminState>().is_err());
    }

    #[test]
    fn test_operating_state_wire_format() {
        let json = serde_json::to_string(&OperatingState::Unknown).unwrap();
        assert_eq!(json, "\"UNKNOWN\"");
    }

    #[test]
    fn test_count_response_uses_capitalized_key() {
        let count: CountResponse =
            serde_json::from_str(r#"{"apiVersion":"v2","statusCode":200,"Count":42}"#).unwrap();
        assert_eq!(count.count, 42);
    }

    #[test]
    fn test_address_keeps_unmodelled_fields() {
        let raw = r#"{"type":"REST","host":"localhost","port":59900,"httpMethod":"POST","path":"/api"}"#;
        let address: Address = serde_json::from_str(raw).unwrap();
        assert_eq!(address.to_string(), "REST://localhost:59900");
        let back = serde_json::to_value(&address).unwrap();
        assert_eq!(back["httpMethod"], "POST");
        assert_eq!(back["path"], "/api");
    }

    #[test]
    fn test_require_identity() {
        assert!(require_identity("device", Some("d1"), None).is_ok());
        assert!(require_identity("device", None, Some("id-1")).is_ok());
        assert!(require_identity("device", Some("  "), None).is_err());
    }
}
