//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every service of a test client points at the same mock server
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use edgex_client::testing::{load_fixture, load_fixture_truncated};
#[allow(unused_imports)]
pub use edgex_client::{ClientError, EdgexClient, Limit, ListQuery};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use edgex_config::{ServiceEndpoint, ServiceName, ServiceRegistry};

/// Client whose five services all resolve to `server`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> EdgexClient {
    client_with_page_size(server, 100)
}

#[allow(dead_code)]
pub fn client_with_page_size(server: &MockServer, page_size: usize) -> EdgexClient {
    let address = server.address();
    let mut registry = ServiceRegistry::default();
    for service in ServiceName::ALL {
        registry = registry.with_endpoint(ServiceEndpoint::new(
            service,
            address.ip().to_string(),
            address.port(),
        ));
    }
    EdgexClient::builder()
        .registry(registry)
        .page_size(page_size)
        .build()
        .expect("client builds")
}

/// Multi-status body EdgeX returns for a successful update or delete.
#[allow(dead_code)]
pub fn ok_outcome() -> serde_json::Value {
    serde_json::json!({"apiVersion": "v2", "statusCode": 200})
}
