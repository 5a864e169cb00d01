//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` and `env_lock()` to prevent environment variable pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod dotenv_tests;
pub mod file_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, unset, for use with `temp_env::with_vars`.
pub fn cleared_vars() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("EDGEX_HOST", None),
        ("EDGEX_TIMEOUT", None),
        ("EDGEX_PAGE_SIZE", None),
        ("EDGEX_API_TOKEN", None),
        ("EDGEX_CLI_CONFIG", None),
        ("EDGEX_CORE_DATA_HOST", None),
        ("EDGEX_CORE_DATA_PORT", None),
        ("EDGEX_CORE_METADATA_HOST", None),
        ("EDGEX_CORE_METADATA_PORT", None),
        ("EDGEX_CORE_COMMAND_HOST", None),
        ("EDGEX_CORE_COMMAND_PORT", None),
        ("EDGEX_SUPPORT_NOTIFICATIONS_HOST", None),
        ("EDGEX_SUPPORT_NOTIFICATIONS_PORT", None),
        ("EDGEX_SUPPORT_SCHEDULER_HOST", None),
        ("EDGEX_SUPPORT_SCHEDULER_PORT", None),
    ]
}

/// `cleared_vars()` with the given overrides applied.
pub fn vars_with(
    set: &[(&'static str, &'static str)],
) -> Vec<(&'static str, Option<&'static str>)> {
    let mut vars: Vec<_> = cleared_vars()
        .into_iter()
        .filter(|(k, _)| !set.iter().any(|(s, _)| s == k))
        .collect();
    vars.extend(set.iter().map(|(k, v)| (*k, Some(*v))));
    vars
}
