//! Integration tests for structured exit codes.
//!
//! Tests cover:
//! - Usage and input errors (5)
//! - Connection failures (3)
//! - Not found (4) and unavailable services (8)

mod common;

use common::{closed_port, edgex_cmd, edgex_cmd_for};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_unknown_subcommand_is_usage_error() {
    edgex_cmd().arg("frobnicate").assert().code(5);
}

#[test]
fn test_help_exits_zero() {
    edgex_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deviceprofile"));
}

#[test]
fn test_limit_below_minus_one_is_validation_error() {
    edgex_cmd()
        .args(["device", "list", "--limit", "-5"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("limit"));
}

#[test]
fn test_invalid_age_is_usage_error() {
    edgex_cmd()
        .args(["event", "rm", "--age", "10w", "--force"])
        .assert()
        .code(5);
}

#[test]
fn test_missing_input_file_is_validation_error() {
    edgex_cmd()
        .args(["interval", "add", "--file", "/nonexistent/intervals.json"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("intervals.json"));
}

#[test]
fn test_bad_port_variable_is_config_error() {
    edgex_cmd()
        .env("EDGEX_CORE_DATA_PORT", "not-a-port")
        .args(["event", "count"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("EDGEX_CORE_DATA_PORT"));
}

#[test]
fn test_connection_refused() {
    edgex_cmd()
        .env("EDGEX_HOST", "127.0.0.1")
        .env("EDGEX_CORE_METADATA_PORT", closed_port().to_string())
        .args(["device", "list"])
        .assert()
        .code(3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/interval/name/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(
            json!({"apiVersion": "v2", "statusCode": 404, "message": "interval missing not found"}),
        ))
        .mount(&server)
        .await;

    edgex_cmd_for(&server)
        .args(["interval", "name", "--name", "missing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("missing"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/subscription/all"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    edgex_cmd_for(&server)
        .args(["subscription", "list"])
        .assert()
        .code(8);
}
