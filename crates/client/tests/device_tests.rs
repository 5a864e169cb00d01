//! Device resource tests against a fake core-metadata.
//!
//! # Invariants
//! - Validation failures never reach the server
//! - A 404 surfaces as `ClientError::NotFound` naming the device
//! - Updates send only the fields that were set

mod common;

use common::*;
use edgex_client::models::{AdminState, Device, UpdateDevice};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};

fn device_named(name: &str) -> Device {
    let fixture = load_fixture("devices/get_device.json");
    let mut device: Device = serde_json::from_value(fixture["device"].clone()).unwrap();
    device.id = None;
    device.name = name.to_string();
    device
}

#[tokio::test]
async fn test_list_devices_forwards_offset_and_limit() {
    let server = MockServer::start().await;
    let fixture = load_fixture_truncated("devices/list_devices.json", "devices", 2);

    Mock::given(method("GET"))
        .and(path("/api/v2/device/all"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .resource::<Device>()
        .list(&ListQuery::new(0, Limit::Count(2)))
        .await
        .unwrap();

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].name, "Random-Integer-Device-1");
    assert_eq!(result.items[1].name, "Random-Integer-Device-2");
    assert_eq!(result.total_count, Some(5));
    assert_eq!(result.limit, 2);
}

#[tokio::test]
async fn test_list_devices_forwards_labels() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/device/all"))
        .and(query_param("labels", "modbus,floor-2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"apiVersion": "v2", "statusCode": 200, "totalCount": 0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = ListQuery::default().with_labels(vec!["modbus".into(), " floor-2 ".into()]);
    let result = client.resource::<Device>().list(&query).await.unwrap();

    assert!(result.items.is_empty());
}

#[tokio::test]
async fn test_list_all_pages_until_short_page() {
    let server = MockServer::start().await;
    let fixture = load_fixture("devices/list_devices.json");
    let all = fixture["devices"].as_array().unwrap().clone();

    for (offset, slice) in [(0usize, &all[0..2]), (2, &all[2..4]), (4, &all[4..5])] {
        Mock::given(method("GET"))
            .and(path("/api/v2/device/all"))
            .and(query_param("offset", offset.to_string()))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "apiVersion": "v2",
                "statusCode": 200,
                "totalCount": 5,
                "devices": slice,
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_with_page_size(&server, 2);
    let result = client
        .resource::<Device>()
        .list(&ListQuery::all())
        .await
        .unwrap();

    let names: Vec<_> = result.items.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Random-Integer-Device-1",
            "Random-Integer-Device-2",
            "Random-Integer-Device-3",
            "Random-Integer-Device-4",
            "Random-Integer-Device-5",
        ]
    );
    assert_eq!(result.limit, -1);
}

#[tokio::test]
async fn test_get_device_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/device/name/Random-Integer-Device-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("devices/get_device.json")),
        )
        .mount(&server)
        .await;

    let device = client_for(&server)
        .resource::<Device>()
        .get_by_name("Random-Integer-Device-1")
        .await
        .unwrap();

    assert_eq!(device.profile_name, "Random-Integer-Device");
    assert_eq!(device.admin_state, AdminState::Unlocked);
    assert_eq!(device.protocols["other"]["Port"], "300");
}

#[tokio::test]
async fn test_get_missing_device_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/device/name/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(load_fixture("errors/not_found.json")))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .resource::<Device>()
        .get_by_name("ghost")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
    assert!(err.to_string().contains("ghost"));
}

#[tokio::test]
async fn test_empty_name_rejected_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .resource::<Device>()
        .get_by_name("  ")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn test_device_has_no_id_lookup() {
    let server = MockServer::start().await;
    let err = client_for(&server)
        .resource::<Device>()
        .get_by_id("6e8e5f7a")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("lookup by id"));
}

#[tokio::test]
async fn test_add_device_wraps_request_envelope() {
    let server = MockServer::start().await;
    let device = device_named("thermostat-1");
    let expected = json!([{
        "apiVersion": "v2",
        "device": serde_json::to_value(&device).unwrap(),
    }]);

    Mock::given(method("POST"))
        .and(path("/api/v2/device"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!([
            {"apiVersion": "v2", "statusCode": 201, "id": "a1b2c3"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .resource::<Device>()
        .add(&device)
        .await
        .unwrap();

    assert_eq!(outcome.id.as_deref(), Some("a1b2c3"));
}

#[tokio::test]
async fn test_added_device_reads_back_with_same_settable_fields() {
    let server = MockServer::start().await;
    let mut submitted = device_named("thermostat-2");
    submitted.created = None;
    submitted.modified = None;
    submitted.labels = vec!["hvac".to_string(), "floor-3".to_string()];
    submitted.location = Some(json!({"building": "B", "room": 301}));

    Mock::given(method("POST"))
        .and(path("/api/v2/device"))
        .and(body_json(json!([{
            "apiVersion": "v2",
            "device": serde_json::to_value(&submitted).unwrap(),
        }])))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!([
            {"apiVersion": "v2", "statusCode": 201, "id": "d-0002"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut stored = serde_json::to_value(&submitted).unwrap();
    stored["id"] = json!("d-0002");
    stored["created"] = json!(1700000000500i64);
    stored["modified"] = json!(1700000000500i64);
    Mock::given(method("GET"))
        .and(path("/api/v2/device/name/thermostat-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiVersion": "v2",
            "statusCode": 200,
            "device": stored,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client.resource::<Device>().add(&submitted).await.unwrap();
    let mut fetched = client
        .resource::<Device>()
        .get_by_name("thermostat-2")
        .await
        .unwrap();

    assert_eq!(fetched.id.as_deref(), outcome.id.as_deref());
    fetched.id = None;
    fetched.created = None;
    fetched.modified = None;
    assert_eq!(fetched, submitted);
}

#[tokio::test]
async fn test_add_conflict_in_multi_status_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/device"))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!([
            {"apiVersion": "v2", "statusCode": 409, "message": "device name thermostat-1 already exists"}
        ])))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .resource::<Device>()
        .add(&device_named("thermostat-1"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("already exists"));
}

#[tokio::test]
async fn test_add_invalid_device_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(207))
        .expect(0)
        .mount(&server)
        .await;

    let mut device = device_named("thermostat-1");
    device.service_name.clear();

    let err = client_for(&server)
        .resource::<Device>()
        .add(&device)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("serviceName"));
}

#[tokio::test]
async fn test_update_sends_only_set_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v2/device"))
        .and(body_json(json!([{
            "apiVersion": "v2",
            "device": {"name": "thermostat-1", "adminState": "LOCKED"}
        }])))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!([ok_outcome()])))
        .expect(1)
        .mount(&server)
        .await;

    let update = UpdateDevice {
        name: Some("thermostat-1".to_string()),
        admin_state: Some(AdminState::Locked),
        ..Default::default()
    };
    let outcome = client_for(&server)
        .resource::<Device>()
        .update(&update)
        .await
        .unwrap();

    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_update_without_identity_rejected() {
    let server = MockServer::start().await;
    let update = UpdateDevice {
        description: Some("new".to_string()),
        ..Default::default()
    };

    let err = client_for(&server)
        .resource::<Device>()
        .update(&update)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn test_delete_device_by_name_encodes_segment() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/device/name/rack%201"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_outcome()))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .resource::<Device>()
        .delete_by_name("rack 1")
        .await
        .unwrap();

    assert_eq!(outcome.status_code, 200);
}

#[tokio::test]
async fn test_delete_missing_device_names_it() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/device/name/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(load_fixture("errors/not_found.json")))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .resource::<Device>()
        .delete_by_name("ghost")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("ghost"));
}

#[tokio::test]
async fn test_device_exists() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/device/check/name/Random-Integer-Device-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_outcome()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/device/check/name/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(load_fixture("errors/not_found.json")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.device_exists("Random-Integer-Device-1").await.unwrap());
    assert!(!client.device_exists("ghost").await.unwrap());
}

#[tokio::test]
async fn test_list_devices_by_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/device/profile/name/Random-Integer-Device"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("devices/list_devices.json")),
        )
        .mount(&server)
        .await;

    let result = client_for(&server)
        .list_devices_by_profile("Random-Integer-Device", &ListQuery::default())
        .await
        .unwrap();

    assert_eq!(result.items.len(), 5);
}

#[tokio::test]
async fn test_server_error_message_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/device/all"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "apiVersion": "v2",
            "message": "database unavailable",
            "statusCode": 503
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .resource::<Device>()
        .list(&ListQuery::default())
        .await
        .unwrap_err();

    assert!(err.is_unavailable());
    assert!(err.to_string().contains("database unavailable"));
}
