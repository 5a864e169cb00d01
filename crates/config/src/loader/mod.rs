//! Configuration loader for `.env` files, environment variables and the JSON config file.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting configuration (the CLI keeps no local state).
//!
//! Invariants / Assumptions:
//! - Defaults < config file < environment < builder overrides.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use file::{ConfigFile, ServiceOverride, default_config_path};

#[cfg(test)]
mod tests;
