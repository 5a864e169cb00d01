//! Runtime connection configuration.
//!
//! Responsibilities:
//! - Hold the fully-resolved settings every command runs with.
//!
//! Invariants:
//! - `timeout` is within `1..=MAX_TIMEOUT_SECS` seconds once built by `ConfigLoader`.
//! - `page_size` is within `1..=MAX_PAGE_SIZE`.
//! - The API token is never printed by `Debug`.

use secrecy::SecretString;
use std::time::Duration;

use super::service::ServiceRegistry;
use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};

/// Immutable configuration passed to each command.
#[derive(Debug, Clone)]
pub struct Config {
    pub registry: ServiceRegistry,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Page size used when listing every remaining item.
    pub page_size: usize,
    /// Bearer token for EdgeX secure mode.
    pub api_token: Option<SecretString>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry: ServiceRegistry::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            api_token: None,
        }
    }
}
