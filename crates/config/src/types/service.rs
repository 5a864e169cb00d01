//! EdgeX microservice names and their network endpoints.
//!
//! Responsibilities:
//! - Enumerate the five EdgeX microservices the CLI talks to.
//! - Map each service to a `{host, port}` endpoint through `ServiceRegistry`.
//!
//! Does NOT handle:
//! - Reading endpoint overrides from the environment or files (see `loader`).
//! - Building request URLs below the service root (see the client crate).
//!
//! Invariants:
//! - The registry always holds exactly one endpoint per `ServiceName`.
//! - A built registry is never mutated; overrides produce a new value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CORE_COMMAND_PORT, DEFAULT_CORE_DATA_PORT, DEFAULT_CORE_METADATA_PORT, DEFAULT_HOST,
    DEFAULT_SUPPORT_NOTIFICATIONS_PORT, DEFAULT_SUPPORT_SCHEDULER_PORT,
};

/// Logical name of an EdgeX microservice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceName {
    CoreMetadata = 0,
    CoreData = 1,
    CoreCommand = 2,
    SupportScheduler = 3,
    SupportNotifications = 4,
}

impl ServiceName {
    /// Every service, in the order used by the cross-cutting commands.
    pub const ALL: [ServiceName; 5] = [
        ServiceName::CoreMetadata,
        ServiceName::CoreData,
        ServiceName::CoreCommand,
        ServiceName::SupportScheduler,
        ServiceName::SupportNotifications,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceName::CoreMetadata => "core-metadata",
            ServiceName::CoreData => "core-data",
            ServiceName::CoreCommand => "core-command",
            ServiceName::SupportScheduler => "support-scheduler",
            ServiceName::SupportNotifications => "support-notifications",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            ServiceName::CoreMetadata => DEFAULT_CORE_METADATA_PORT,
            ServiceName::CoreData => DEFAULT_CORE_DATA_PORT,
            ServiceName::CoreCommand => DEFAULT_CORE_COMMAND_PORT,
            ServiceName::SupportScheduler => DEFAULT_SUPPORT_SCHEDULER_PORT,
            ServiceName::SupportNotifications => DEFAULT_SUPPORT_NOTIFICATIONS_PORT,
        }
    }

    /// Prefix of the per-service environment variables, e.g. `EDGEX_CORE_DATA`.
    pub fn env_prefix(self) -> &'static str {
        match self {
            ServiceName::CoreMetadata => "EDGEX_CORE_METADATA",
            ServiceName::CoreData => "EDGEX_CORE_DATA",
            ServiceName::CoreCommand => "EDGEX_CORE_COMMAND",
            ServiceName::SupportScheduler => "EDGEX_SUPPORT_SCHEDULER",
            ServiceName::SupportNotifications => "EDGEX_SUPPORT_NOTIFICATIONS",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown service '{}'. Valid services: {}",
                    s,
                    ServiceName::ALL.map(ServiceName::as_str).join(", ")
                )
            })
    }
}

/// Network location of one microservice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub name: ServiceName,
    pub host: String,
    pub port: u16,
}

impl ServiceEndpoint {
    pub fn new(name: ServiceName, host: impl Into<String>, port: u16) -> Self {
        Self {
            name,
            host: host.into(),
            port,
        }
    }

    /// Root URL of the service, without the API prefix.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Immutable lookup from service name to endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRegistry {
    endpoints: [ServiceEndpoint; 5],
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::with_host(DEFAULT_HOST)
    }
}

impl ServiceRegistry {
    /// Every service on `host` at its default port.
    pub fn with_host(host: &str) -> Self {
        Self {
            endpoints: ServiceName::ALL
                .map(|name| ServiceEndpoint::new(name, host, name.default_port())),
        }
    }

    /// Replace the endpoint for `endpoint.name`.
    pub fn with_endpoint(mut self, endpoint: ServiceEndpoint) -> Self {
        let idx = endpoint.name.index();
        self.endpoints[idx] = endpoint;
        self
    }

    pub fn endpoint(&self, name: ServiceName) -> &ServiceEndpoint {
        &self.endpoints[name.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceEndpoint> {
        self.endpoints.iter()
    }
}
