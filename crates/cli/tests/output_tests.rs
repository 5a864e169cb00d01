//! Integration tests for output handling and the core-data / core-command commands.
//!
//! Tests cover:
//! - `--output-file` writes the rendered output instead of printing it
//! - Counts, event listings and reading listings
//! - Issuing read and write commands

mod common;

use common::edgex_cmd_for;
use edgex_client::models::Event;
use edgex_client::testing::load_fixture;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_output_file_receives_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/event/device/name/Random-Integer-Device-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("events/list_events.json")))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("events.json");

    edgex_cmd_for(&server)
        .args(["--json", "--output-file"])
        .arg(&out)
        .args(["event", "list", "--device", "Random-Integer-Device-1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Results written to"));

    let events: Vec<Event> = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].device_name, "Random-Integer-Device-1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_quiet_output_file_prints_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/event/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apiVersion": "v2", "Count": 42})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("count.txt");

    edgex_cmd_for(&server)
        .args(["--quiet", "--output-file"])
        .arg(&out)
        .args(["event", "count"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "Events: 42\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reading_count_by_device_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/reading/count/device/name/sensor-a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apiVersion": "v2", "Count": 7})))
        .mount(&server)
        .await;

    let output = edgex_cmd_for(&server)
        .args(["--json", "reading", "count", "--device", "sensor-a"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body, json!({"Count": 7}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_command_read_shows_readings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/device/name/Random-Integer-Device-1/Int16"))
        .and(query_param("ds-pushevent", "no"))
        .and(query_param("ds-returnevent", "yes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("events/get_command_event.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    edgex_cmd_for(&server)
        .args([
            "command",
            "read",
            "--device",
            "Random-Integer-Device-1",
            "--command",
            "Int16",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Int16").and(predicate::str::contains("-7999")));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_command_write_sends_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/device/name/Random-Integer-Device-1/Int16"))
        .and(body_json(json!({"Int16": "42"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"apiVersion": "v2", "statusCode": 200})),
        )
        .expect(1)
        .mount(&server)
        .await;

    edgex_cmd_for(&server)
        .args([
            "command",
            "write",
            "-d",
            "Random-Integer-Device-1",
            "-c",
            "Int16",
            "--body",
            r#"{"Int16": "42"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Command 'Int16' sent to device 'Random-Integer-Device-1'.",
        ));
}

#[test]
fn test_command_write_rejects_non_object_body() {
    common::edgex_cmd()
        .args(["command", "write", "-d", "d", "-c", "c", "--body", "[1, 2]"])
        .assert()
        .code(5);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_event_rm_by_age_uses_nanoseconds() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/event/age/3600000000000"))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({"apiVersion": "v2", "statusCode": 202})),
        )
        .expect(1)
        .mount(&server)
        .await;

    edgex_cmd_for(&server)
        .args(["event", "rm", "--age", "1h", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Events older than 3600s deleted."));
}
