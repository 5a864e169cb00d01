//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read `EDGEX_*` variables and apply them to a `ConfigLoader`.
//! - Provide `env_var_or_none` with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Config file loading, including `EDGEX_CLI_CONFIG` (see file.rs).
//! - Validation of the final values (see builder.rs).
//!
//! Invariants:
//! - Environment variables take precedence over config file values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::ServiceName;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none("EDGEX_HOST") {
        loader.set_host(Some(host));
    }
    if let Some(secs) = parse_env::<u64>("EDGEX_TIMEOUT", "must be a number of seconds")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(size) = parse_env::<usize>("EDGEX_PAGE_SIZE", "must be a positive integer")? {
        loader.set_page_size(Some(size));
    }
    if let Some(token) = env_var_or_none("EDGEX_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }

    for service in ServiceName::ALL {
        let host_var = format!("{}_HOST", service.env_prefix());
        if let Some(host) = env_var_or_none(&host_var) {
            loader.set_service_host(service, host);
        }
        let port_var = format!("{}_PORT", service.env_prefix());
        if let Some(port) = parse_env::<u16>(&port_var, "must be a port number (0-65535)")? {
            loader.set_service_port(service, port);
        }
    }

    Ok(())
}
