//! Ping, version and per-service report tests.

mod common;

use common::*;
use edgex_config::ServiceName;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_ping_single_service() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("system/ping.json")))
        .mount(&server)
        .await;

    let ping = client_for(&server).ping(ServiceName::CoreData).await.unwrap();
    assert_eq!(ping.service_name, "core-data");
}

#[tokio::test]
async fn test_reports_keep_service_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("system/version.json")))
        .mount(&server)
        .await;

    let services = [ServiceName::CoreMetadata, ServiceName::SupportScheduler];
    let reports = client_for(&server).version_services(&services).await;

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].service, ServiceName::CoreMetadata);
    assert_eq!(reports[1].service, ServiceName::SupportScheduler);
    assert!(reports.iter().all(|r| r.is_ok()));
}

#[tokio::test]
async fn test_unreachable_service_reported_not_raised() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let reports = client.ping_services(&[ServiceName::CoreCommand]).await;

    assert_eq!(reports.len(), 1);
    let err = reports[0].result.as_ref().unwrap_err();
    assert!(err.is_connection_error());
}
