//! Shared test utilities for edgex-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point every EdgeX service at one mock server.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: no `.env`, no
//!   config file, and no `EDGEX_*` variables leak in from the host.

use assert_cmd::Command;
use edgex_config::ServiceName;
use wiremock::MockServer;

/// Returns a hermetic `edgex-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - The default config location resolves to a directory that does not exist.
/// - Host and port variables are cleared to ensure no leakage from the host.
pub fn edgex_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("edgex-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("HOME", "/nonexistent/edgex-cli-home")
        .env("XDG_CONFIG_HOME", "/nonexistent/edgex-cli-home/.config");

    for var in scrubbed_vars() {
        cmd.env_remove(var);
    }

    cmd
}

/// Variables that must not leak into a test run from the host environment.
fn scrubbed_vars() -> Vec<String> {
    let mut vars: Vec<String> = [
        "EDGEX_CLI_CONFIG",
        "EDGEX_HOST",
        "EDGEX_TIMEOUT",
        "EDGEX_PAGE_SIZE",
        "EDGEX_API_TOKEN",
        "RUST_LOG",
    ]
    .iter()
    .map(|v| v.to_string())
    .collect();
    for service in ServiceName::ALL {
        vars.push(format!("{}_HOST", service.env_prefix()));
        vars.push(format!("{}_PORT", service.env_prefix()));
    }
    vars
}

/// Endpoint variables that put every service on `server`.
#[allow(dead_code)]
fn endpoint_vars(server: &MockServer) -> Vec<(String, String)> {
    let address = server.address();
    let mut vars = vec![("EDGEX_HOST".to_string(), address.ip().to_string())];
    for service in ServiceName::ALL {
        vars.push((
            format!("{}_PORT", service.env_prefix()),
            address.port().to_string(),
        ));
    }
    vars
}

/// Returns a hermetic `edgex-cli` command with every service on `server`.
#[allow(dead_code)]
pub fn edgex_cmd_for(server: &MockServer) -> Command {
    let mut cmd = edgex_cmd();
    cmd.envs(endpoint_vars(server));
    cmd
}

/// Same environment as `edgex_cmd_for`, as an async child process that can be signalled.
#[allow(dead_code)]
pub fn edgex_process_for(server: &MockServer) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new(assert_cmd::cargo::cargo_bin!("edgex-cli"));
    cmd.env("DOTENV_DISABLED", "1")
        .env("HOME", "/nonexistent/edgex-cli-home")
        .env("XDG_CONFIG_HOME", "/nonexistent/edgex-cli-home/.config");
    for var in scrubbed_vars() {
        cmd.env_remove(var);
    }
    cmd.envs(endpoint_vars(server));
    cmd
}

/// A port on localhost with nothing listening.
#[allow(dead_code)]
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}
