//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Environment variable parsing (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Layers apply in call order; later layers overwrite earlier ones.
//! - A per-service host always wins over the global host, whichever layer set it.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::{ServiceOverride, apply_file};
use crate::constants::{
    DEFAULT_HOST, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS, MAX_PAGE_SIZE, MAX_TIMEOUT_SECS,
};
use crate::types::{Config, ServiceEndpoint, ServiceName, ServiceRegistry};

/// Configuration loader that builds config from files, environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    host: Option<String>,
    timeout: Option<Duration>,
    page_size: Option<usize>,
    api_token: Option<SecretString>,
    config_path: Option<PathBuf>,
    services: HashMap<ServiceName, ServiceOverride>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read the JSON config file.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the host shared by every service without its own host.
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the page size for "all remaining" listings.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the bearer token.
    pub fn with_api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    /// Point one service at a specific host and port.
    pub fn with_service(mut self, service: ServiceName, host: String, port: u16) -> Self {
        self.set_service_host(service, host);
        self.set_service_port(service, port);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::validate_timeout(timeout)?;

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize {
                message: format!("must be between 1 and {} (got {})", MAX_PAGE_SIZE, page_size),
            });
        }

        let global_host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let mut registry = ServiceRegistry::with_host(global_host);
        for service in ServiceName::ALL {
            let over = self.services.get(&service);
            let host = over
                .and_then(|o| o.host.as_deref())
                .unwrap_or(global_host);
            let port = over
                .and_then(|o| o.port)
                .unwrap_or_else(|| service.default_port());
            let endpoint = ServiceEndpoint::new(service, host, port);
            validate_endpoint(&endpoint)?;
            registry = registry.with_endpoint(endpoint);
        }

        Ok(Config {
            registry,
            timeout,
            page_size,
            api_token: self.api_token,
        })
    }

    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let secs = timeout.as_secs();
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }
        Ok(())
    }

    // Internal accessors for the other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_page_size(&mut self, page_size: Option<usize>) {
        self.page_size = page_size;
    }

    pub(crate) fn set_api_token(&mut self, token: Option<SecretString>) {
        self.api_token = token;
    }

    pub(crate) fn set_service_host(&mut self, service: ServiceName, host: String) {
        self.services.entry(service).or_default().host = Some(host);
    }

    pub(crate) fn set_service_port(&mut self, service: ServiceName, port: u16) {
        self.services.entry(service).or_default().port = Some(port);
    }
}

fn validate_endpoint(endpoint: &ServiceEndpoint) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidHost {
        service: endpoint.name.to_string(),
        host: endpoint.host.clone(),
        message,
    };

    if endpoint.port == 0 {
        return Err(invalid("port must be non-zero".to_string()));
    }
    if endpoint.host.contains("://") || endpoint.host.contains('/') {
        return Err(invalid(
            "expected a bare host name or address, not a URL".to_string(),
        ));
    }
    let parsed = url::Url::parse(&endpoint.base_url()).map_err(|e| invalid(e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("host is empty".to_string()));
    }
    Ok(())
}
