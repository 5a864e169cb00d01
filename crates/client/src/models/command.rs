//! Core-command models.

use serde::{Deserialize, Serialize};

/// The commands exposed by one device through core-command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCoreCommand {
    pub device_name: String,
    pub profile_name: String,
    #[serde(default)]
    pub core_commands: Vec<CoreCommand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreCommand {
    pub name: String,
    #[serde(default)]
    pub get: bool,
    #[serde(default)]
    pub set: bool,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<CoreCommandParameter>,
}

impl CoreCommand {
    /// `R`, `W` or `RW`, as shown in tables.
    pub fn access(&self) -> &'static str {
        match (self.get, self.set) {
            (true, true) => "RW",
            (true, false) => "R",
            (false, true) => "W",
            (false, false) => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreCommandParameter {
    pub resource_name: String,
    pub value_type: String,
}
