//! Responses of the routes every EdgeX service exposes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    #[serde(default)]
    pub api_version: String,
    pub timestamp: String,
    #[serde(default)]
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionResponse {
    #[serde(default)]
    pub api_version: String,
    pub version: String,
    #[serde(default)]
    pub service_name: String,
}

/// Effective configuration of a service; the shape differs per service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    #[serde(default)]
    pub api_version: String,
    pub config: Value,
    #[serde(default)]
    pub service_name: String,
}

/// Runtime metrics (memory and CPU) of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    #[serde(default)]
    pub api_version: String,
    pub metrics: Value,
    #[serde(default)]
    pub service_name: String,
}
