use super::*;
use super::common;
use edgex_client::models::{Device, Event, PingResponse};
use edgex_client::{ClientError, PurgeStep};
use edgex_config::ServiceName;
use serde_json::json;

fn device(name: &str) -> Device {
    serde_json::from_value(json!({
        "id": format!("id-{name}"),
        "name": name,
        "adminState": "UNLOCKED",
        "operatingState": "UP",
        "serviceName": "device-virtual",
        "profileName": "Random-Integer-Device",
        "labels": ["virtual"],
        "protocols": {"other": {"Address": "simulated"}},
        "created": 1_700_000_000_000i64
    }))
    .unwrap()
}

fn list_of(items: Vec<Device>, total: Option<u64>) -> ListResult<Device> {
    ListResult {
        items,
        offset: 0,
        limit: 50,
        total_count: total,
    }
}

#[test]
fn test_table_empty_list_message() {
    let output = TableFormatter.format_list(&list_of(vec![], Some(0)), false).unwrap();
    assert_eq!(output, "No devices found.\n");
}

#[test]
fn test_json_empty_list_is_empty_array() {
    let output = JsonFormatter.format_list(&list_of(vec![], None), false).unwrap();
    assert_eq!(output.trim(), "[]");
}

#[test]
fn test_table_columns_are_aligned() {
    let output = TableFormatter
        .format_list(&list_of(vec![device("a"), device("much-longer-name")], None), false)
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("NAME"));
    assert!(lines[1].starts_with("===="));
    let column = lines[0].find("DESCRIPTION").unwrap();
    assert_eq!(lines[2].find("N/A"), Some(column));
    assert_eq!(lines[3].find("N/A"), Some(column));
}

#[test]
fn test_table_footer_uses_server_total() {
    let output = TableFormatter
        .format_list(&list_of(vec![device("a"), device("b")], Some(5)), false)
        .unwrap();
    assert!(output.contains("Showing 1-2 of 5"));
}

#[test]
fn test_verbose_adds_columns_and_timestamps() {
    let output = TableFormatter.format_item(&device("a"), true).unwrap();
    assert!(output.contains("LABELS"));
    assert!(output.contains("virtual"));
    assert!(output.contains("2023-11-14"));
    assert!(output.contains("id-a"));
}

#[test]
fn test_json_list_round_trips() {
    let devices = vec![device("a"), device("b")];
    let output = JsonFormatter.format_list(&list_of(devices.clone(), Some(2)), false).unwrap();
    let parsed: Vec<Device> = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, devices);
}

#[test]
fn test_verbose_event_has_one_row_per_reading() {
    let event: Event = serde_json::from_value(json!({
        "id": "e1",
        "deviceName": "d",
        "profileName": "p",
        "sourceName": "Int16",
        "origin": 1_700_000_000_000_000_000i64,
        "readings": [
            {"deviceName": "d", "resourceName": "Int16", "profileName": "p", "valueType": "Int16", "value": "1"},
            {"deviceName": "d", "resourceName": "Int32", "profileName": "p", "valueType": "Int32", "value": "2"}
        ]
    }))
    .unwrap();

    let output = TableFormatter.format_item(&event, true).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[2].starts_with("e1"));
    assert!(lines[3].trim_start().starts_with("Int32"));
}

#[test]
fn test_service_reports_show_errors_inline() {
    let reports = vec![
        ServiceReport {
            service: ServiceName::CoreData,
            result: Ok(PingResponse {
                api_version: "v2".to_string(),
                timestamp: "Mon Oct 12 10:00:00 UTC 2026".to_string(),
                service_name: "core-data".to_string(),
            }),
        },
        ServiceReport {
            service: ServiceName::SupportScheduler,
            result: Err(ClientError::Validation("refused".to_string())),
        },
    ];

    let table = TableFormatter.format_service_reports(&reports).unwrap();
    assert!(table.contains("core-data"));
    assert!(table.contains("OK"));
    assert!(table.contains("support-scheduler"));
    assert!(table.contains("ERROR"));
    assert!(table.contains("refused"));

    let json: serde_json::Value =
        serde_json::from_str(&JsonFormatter.format_service_reports(&reports).unwrap()).unwrap();
    assert_eq!(json[0]["service"], "core-data");
    assert_eq!(json[0]["ok"], true);
    assert_eq!(json[1]["ok"], false);
}

#[test]
fn test_purge_report_lists_failures() {
    let reports = vec![DeleteReport {
        resource: PurgeStep::Devices,
        attempted: 3,
        succeeded: 2,
        failures: vec![("dev-2".to_string(), "API error (409)".to_string())],
        list_error: None,
    }];

    let output = TableFormatter.format_purge_reports(&reports).unwrap();
    assert!(output.contains("devices"));
    assert!(output.contains("Failed deletes:"));
    assert!(output.contains("devices 'dev-2': API error (409)"));
}

#[test]
fn test_count_formats() {
    assert_eq!(TableFormatter.format_count("Events", 7).unwrap(), "Events: 7\n");
    let json: serde_json::Value =
        serde_json::from_str(&JsonFormatter.format_count("Events", 7).unwrap()).unwrap();
    assert_eq!(json, json!({"Count": 7}));
}

#[test]
fn test_format_millis_and_missing() {
    assert_eq!(common::format_millis(None), "N/A");
    assert_eq!(common::format_millis(Some(0)), "N/A");
    assert_eq!(common::format_millis(Some(1_700_000_000_000)), "2023-11-14 22:13:20");
    assert_eq!(common::format_missing(Some("  ")), "N/A");
    assert_eq!(common::format_missing(Some("x")), "x");
}

#[test]
fn test_write_to_file_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.json");
    common::write_to_file("[]\n", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
}
