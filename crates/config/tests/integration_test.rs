//! Integration tests for configuration loading.
//!
//! These tests verify end-to-end loader behavior: the file, environment and
//! override layers applied in the order the CLI applies them.

use edgex_config::{ConfigError, ConfigLoader, ServiceName, env_var_or_none};
use serial_test::serial;
use std::io::Write;
use std::time::Duration;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const CLEARED_VARS: [(&str, Option<&str>); 7] = [
    ("EDGEX_HOST", None),
    ("EDGEX_TIMEOUT", None),
    ("EDGEX_PAGE_SIZE", None),
    ("EDGEX_API_TOKEN", None),
    ("EDGEX_CLI_CONFIG", None),
    ("EDGEX_CORE_DATA_HOST", None),
    ("EDGEX_CORE_DATA_PORT", None),
];

/// Defaults < file < environment < builder overrides.
#[test]
#[serial]
fn test_layer_precedence() {
    let file = write_config(
        r#"{
            "host": "file-host",
            "timeout_seconds": 12,
            "services": {"core-data": {"port": 6000}}
        }"#,
    );

    let mut vars = CLEARED_VARS.to_vec();
    vars.push(("EDGEX_TIMEOUT", Some("20")));
    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new()
            .with_config_path(file.path().to_path_buf())
            .from_file()
            .unwrap()
            .from_env()
            .unwrap()
            .with_host("cli-host".to_string())
            .build()
            .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(20));
        let data = config.registry.endpoint(ServiceName::CoreData);
        assert_eq!(data.base_url(), "http://cli-host:6000");
        let metadata = config.registry.endpoint(ServiceName::CoreMetadata);
        assert_eq!(metadata.base_url(), "http://cli-host:59881");
    });
}

/// A per-service host beats the global host from any layer.
#[test]
#[serial]
fn test_service_host_beats_global_host() {
    let mut vars = CLEARED_VARS.to_vec();
    vars.push(("EDGEX_CORE_DATA_HOST", Some("data.internal")));
    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new()
            .from_env()
            .unwrap()
            .with_host("edge-gw".to_string())
            .build()
            .unwrap();

        assert_eq!(
            config.registry.endpoint(ServiceName::CoreData).host,
            "data.internal"
        );
        assert_eq!(
            config.registry.endpoint(ServiceName::CoreCommand).host,
            "edge-gw"
        );
    });
}

#[test]
#[serial]
fn test_explicit_missing_file_is_an_error() {
    temp_env::with_vars(CLEARED_VARS.to_vec(), || {
        let result = ConfigLoader::new()
            .with_config_path("/nonexistent/edgex-cli/config.json".into())
            .from_file();
        assert!(matches!(result, Err(ConfigError::ConfigFileRead { .. })));
    });
}

#[test]
#[serial]
fn test_unknown_file_keys_rejected() {
    let file = write_config(r#"{"hots": "typo"}"#);
    temp_env::with_vars(CLEARED_VARS.to_vec(), || {
        let result = ConfigLoader::new()
            .with_config_path(file.path().to_path_buf())
            .from_file();
        assert!(matches!(result, Err(ConfigError::ConfigFileParse { .. })));
    });
}

#[test]
#[serial]
fn test_config_path_from_environment() {
    let file = write_config(r#"{"page_size": 10}"#);
    let mut vars = CLEARED_VARS.to_vec();
    let path = file.path().to_string_lossy().to_string();
    vars.push(("EDGEX_CLI_CONFIG", Some(path.as_str())));
    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new().from_file().unwrap().build().unwrap();
        assert_eq!(config.page_size, 10);
    });
}

/// Test that env_var_or_none is exported and treats blanks as unset
#[test]
#[serial]
fn test_env_var_or_none_exported() {
    temp_env::with_var("EDGEX_HOST", Some("   "), || {
        assert_eq!(env_var_or_none("EDGEX_HOST"), None);
    });
}
