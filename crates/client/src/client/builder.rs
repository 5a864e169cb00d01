//! Client builder for constructing [`EdgexClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Converting a loaded [`Config`] into client settings
//! - Configuring the underlying HTTP client (timeout, user agent)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`EdgexClient`] methods)
//! - Validating host names (done when the config is loaded)

use secrecy::SecretString;
use std::time::Duration;

use crate::client::EdgexClient;
use crate::error::{ClientError, Result};
use edgex_config::constants::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use edgex_config::{Config, ServiceRegistry};

/// Builder for creating a new [`EdgexClient`].
///
/// ```rust,ignore
/// use edgex_client::EdgexClient;
/// use edgex_config::ServiceRegistry;
///
/// let client = EdgexClient::builder()
///     .registry(ServiceRegistry::with_host("edgex.local"))
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct EdgexClientBuilder {
    registry: ServiceRegistry,
    timeout: Duration,
    page_size: usize,
    api_token: Option<SecretString>,
}

impl Default for EdgexClientBuilder {
    fn default() -> Self {
        Self {
            registry: ServiceRegistry::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            api_token: None,
        }
    }
}

impl EdgexClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service endpoints.
    pub fn registry(mut self, registry: ServiceRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the page size used for `limit = -1` listings.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.registry = config.registry.clone();
        self.timeout = config.timeout;
        self.page_size = config.page_size;
        self.api_token = config.api_token.clone();
        self
    }

    /// Build the [`EdgexClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for a zero page size and
    /// `ClientError::Transport` if the HTTP client fails to build.
    pub fn build(self) -> Result<EdgexClient> {
        if self.page_size == 0 {
            return Err(ClientError::Validation(
                "page size must be greater than 0".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("edgex-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(EdgexClient {
            http,
            registry: self.registry,
            page_size: self.page_size,
            api_token: self.api_token,
        })
    }
}
