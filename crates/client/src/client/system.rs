//! Routes shared by every EdgeX service: ping, version, config and metrics.
//!
//! The multi-service variants query one service after another and never
//! fail as a whole; every service gets its own [`ServiceReport`].

use futures::stream::{self, StreamExt};
use serde::de::DeserializeOwned;

use crate::client::EdgexClient;
use crate::error::Result;
use crate::models::{ConfigResponse, MetricsResponse, PingResponse, VersionResponse};
use edgex_config::ServiceName;

/// Outcome of one system query against one service.
#[derive(Debug)]
pub struct ServiceReport<T> {
    pub service: ServiceName,
    pub result: Result<T>,
}

impl<T> ServiceReport<T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl EdgexClient {
    pub async fn ping(&self, service: ServiceName) -> Result<PingResponse> {
        self.get_json(service, "ping", &[]).await
    }

    pub async fn version(&self, service: ServiceName) -> Result<VersionResponse> {
        self.get_json(service, "version", &[]).await
    }

    pub async fn service_config(&self, service: ServiceName) -> Result<ConfigResponse> {
        self.get_json(service, "config", &[]).await
    }

    pub async fn metrics(&self, service: ServiceName) -> Result<MetricsResponse> {
        self.get_json(service, "metrics", &[]).await
    }

    pub async fn ping_services(&self, services: &[ServiceName]) -> Vec<ServiceReport<PingResponse>> {
        self.query_services(services, "ping").await
    }

    pub async fn version_services(
        &self,
        services: &[ServiceName],
    ) -> Vec<ServiceReport<VersionResponse>> {
        self.query_services(services, "version").await
    }

    pub async fn config_services(
        &self,
        services: &[ServiceName],
    ) -> Vec<ServiceReport<ConfigResponse>> {
        self.query_services(services, "config").await
    }

    pub async fn metrics_services(
        &self,
        services: &[ServiceName],
    ) -> Vec<ServiceReport<MetricsResponse>> {
        self.query_services(services, "metrics").await
    }

    /// Results come back in the order of `services`.
    async fn query_services<T: DeserializeOwned>(
        &self,
        services: &[ServiceName],
        path: &str,
    ) -> Vec<ServiceReport<T>> {
        stream::iter(services.iter().copied())
            .then(|service| async move {
                let result = self.get_json(service, path, &[]).await;
                if let Err(e) = &result {
                    tracing::debug!(%service, path, error = %e, "system query failed");
                }
                ServiceReport { service, result }
            })
            .collect()
            .await
    }
}
