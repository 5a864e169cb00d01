//! Config file layer tests.

use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

use super::{cleared_vars, env_lock, vars_with};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::ServiceName;

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn test_file_values_applied() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        temp_dir.path(),
        r#"{"host": "file.local", "timeout_seconds": 5, "page_size": 10,
            "services": {"core-metadata": {"port": 48081}}}"#,
    );

    temp_env::with_vars(cleared_vars(), || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.page_size, 10);
        assert_eq!(
            config.registry.endpoint(ServiceName::CoreMetadata).base_url(),
            "http://file.local:48081"
        );
    });
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), r#"{"host": "file.local", "page_size": 10}"#);

    temp_env::with_vars(vars_with(&[("EDGEX_PAGE_SIZE", "40")]), || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.page_size, 40);
        assert_eq!(config.registry.endpoint(ServiceName::CoreData).host, "file.local");
    });
}

#[test]
#[serial]
fn test_config_path_from_env_var() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), r#"{"host": "via-env-path"}"#);
    let mut vars: Vec<(&str, Option<String>)> = cleared_vars()
        .into_iter()
        .filter(|(k, _)| *k != "EDGEX_CLI_CONFIG")
        .map(|(k, v)| (k, v.map(str::to_string)))
        .collect();
    vars.push(("EDGEX_CLI_CONFIG", Some(path.to_string_lossy().into_owned())));

    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new().from_file().unwrap().build().unwrap();
        assert_eq!(
            config.registry.endpoint(ServiceName::CoreData).host,
            "via-env-path"
        );
    });
}

#[test]
#[serial]
fn test_missing_explicit_file_is_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();

    temp_env::with_vars(cleared_vars(), || {
        let err = ConfigLoader::new()
            .with_config_path(temp_dir.path().join("absent.json"))
            .from_file()
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::ConfigFileRead { .. }));
    });
}

#[test]
#[serial]
fn test_malformed_file_reports_path() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "{ not json");

    temp_env::with_vars(cleared_vars(), || {
        let err = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
        assert!(err.to_string().contains("config.json"));
    });
}
