//! JSON config file loading.
//!
//! Responsibilities:
//! - Resolve the config file path (`--config-path`, `EDGEX_CLI_CONFIG`, or the default).
//! - Parse the file and apply its values to a `ConfigLoader`.
//!
//! Does NOT handle:
//! - Writing the file back (the CLI keeps no local state).
//!
//! Invariants:
//! - File values are applied before environment variables (env vars take precedence).
//! - A missing file at the default location is not an error.
//! - A missing file at an explicitly requested location is an error.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::builder::ConfigLoader;
use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::types::ServiceName;

/// Host/port override for one service.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServiceOverride {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// On-disk shape of `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub page_size: Option<usize>,
    #[serde(default)]
    pub services: HashMap<ServiceName, ServiceOverride>,
}

impl ConfigFile {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the default path to the configuration file.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .ok_or(ConfigError::ConfigDirUnavailable)?;
    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Apply the config file, if one exists, to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let explicit = loader
        .config_path()
        .cloned()
        .or_else(|| env_var_or_none("EDGEX_CLI_CONFIG").map(PathBuf::from));

    let path = match explicit {
        Some(path) => path,
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file at default location");
                return Ok(());
            }
            path
        }
    };

    tracing::debug!(path = %path.display(), "loading config file");
    let file = ConfigFile::read(&path)?;
    apply_config_file(loader, file);
    Ok(())
}

fn apply_config_file(loader: &mut ConfigLoader, file: ConfigFile) {
    if let Some(host) = file.host.filter(|h| !h.trim().is_empty()) {
        loader.set_host(Some(host));
    }
    if let Some(secs) = file.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(size) = file.page_size {
        loader.set_page_size(Some(size));
    }
    for (service, over) in file.services {
        if let Some(host) = over.host.filter(|h| !h.trim().is_empty()) {
            loader.set_service_host(service, host);
        }
        if let Some(port) = over.port {
            loader.set_service_port(service, port);
        }
    }
}
