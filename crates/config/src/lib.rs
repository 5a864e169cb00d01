//! Configuration management for edgex-cli.
//!
//! This crate provides the EdgeX service registry and the loader that
//! resolves it from defaults, a JSON config file, environment variables
//! and command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigFile, ConfigLoader, ServiceOverride, default_config_path, env_var_or_none,
};
pub use types::{Config, ServiceEndpoint, ServiceName, ServiceRegistry};
