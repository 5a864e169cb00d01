//! Main EdgeX REST API client.
//!
//! [`EdgexClient`] owns the HTTP connection pool and the immutable service
//! registry. Generic CRUD goes through [`EdgexClient::resource`]; the
//! submodules add the routes that only one resource has.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `devices`: existence check and lookups by profile or service
//! - `device_profiles`: basic-info update and profile file upload
//! - `events`: counts, per-device queries, age-based deletes, event ingestion
//! - `readings`: counts and per-device or per-resource queries
//! - `notifications`: category/label/status queries and age-based deletes
//! - `subscriptions`, `transmissions`: filtered listings
//! - `commands`: core-command device commands
//! - `system`: ping, version, config and metrics on every service
//!
//! # What this module does NOT handle:
//! - Status-to-error mapping (delegated to [`crate::endpoints::send_request`])
//! - Route tables of the generic resources (see [`crate::resource`])
//!
//! # Invariants
//! - Every request is sent exactly once.
//! - The bearer token, when configured, is attached to every request.

pub mod builder;

mod commands;
mod device_profiles;
mod devices;
mod events;
mod notifications;
mod readings;
mod subscriptions;
mod system;
mod transmissions;

use reqwest::{Method, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoints::{decode_body, decode_field, send_request};
use crate::error::{ClientError, Result};
use crate::models::UpdateOutcome;
use crate::resource::{Limit, ListQuery, ListResult, Resource, ResourceClient, collect_all};
use builder::EdgexClientBuilder;
use edgex_config::constants::API_PREFIX;
use edgex_config::{ServiceName, ServiceRegistry};

pub use notifications::NotificationFilter;
pub use subscriptions::SubscriptionFilter;
pub use system::ServiceReport;

/// EdgeX REST API client.
///
/// ```rust,ignore
/// use edgex_client::{EdgexClient, ListQuery};
/// use edgex_client::models::Device;
///
/// let client = EdgexClient::builder().from_config(&config).build()?;
/// let devices = client.resource::<Device>().list(&ListQuery::default()).await?;
/// ```
#[derive(Debug)]
pub struct EdgexClient {
    pub(crate) http: reqwest::Client,
    pub(crate) registry: ServiceRegistry,
    pub(crate) page_size: usize,
    pub(crate) api_token: Option<SecretString>,
}

impl EdgexClient {
    pub fn builder() -> EdgexClientBuilder {
        EdgexClientBuilder::new()
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Typed CRUD client for resource `R`.
    pub fn resource<R: Resource>(&self) -> ResourceClient<'_, R> {
        ResourceClient::new(self)
    }

    /// Full URL of `path` below the service's `/api/v2` root.
    pub fn url(&self, service: ServiceName, path: &str) -> Result<Url> {
        let endpoint = self.registry.endpoint(service);
        let raw = format!(
            "{}{}/{}",
            endpoint.base_url(),
            API_PREFIX,
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// Send one request and return the body together with the URL it was sent to.
    pub(crate) async fn execute(
        &self,
        method: Method,
        service: ServiceName,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<(Vec<u8>, String)> {
        let url = self.url(service, path)?;
        let url_text = url.to_string();

        let mut builder = self.http.request(method.clone(), url);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let bytes = send_request(builder, method.as_str(), &url_text).await?;
        Ok((bytes, url_text))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        service: ServiceName,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let (bytes, url) = self.execute(Method::GET, service, path, query, None).await?;
        decode_body(&bytes, &url)
    }

    pub(crate) async fn get_field<T: DeserializeOwned>(
        &self,
        service: ServiceName,
        path: &str,
        key: &str,
    ) -> Result<T> {
        let (bytes, url) = self.execute(Method::GET, service, path, &[], None).await?;
        decode_field(&bytes, key, &url)
    }

    pub(crate) async fn delete(&self, service: ServiceName, path: &str) -> Result<UpdateOutcome> {
        let (bytes, url) = self
            .execute(Method::DELETE, service, path, &[], None)
            .await?;
        decode_body(&bytes, &url)
    }

    /// One page of a collection route.
    async fn list_page<T: DeserializeOwned>(
        &self,
        service: ServiceName,
        path: &str,
        key: &str,
        params: &[(&str, String)],
    ) -> Result<(Vec<T>, Option<u64>)> {
        let (bytes, url) = self
            .execute(Method::GET, service, path, params, None)
            .await?;
        let items: Option<Vec<T>> = decode_field(&bytes, key, &url)?;
        let total: Option<u64> = decode_field(&bytes, "totalCount", &url)?;
        Ok((items.unwrap_or_default(), total))
    }

    /// List a collection route, paging when the query asks for every item.
    pub(crate) async fn list_collection<T: DeserializeOwned>(
        &self,
        service: ServiceName,
        path: &str,
        key: &str,
        query: &ListQuery,
    ) -> Result<ListResult<T>> {
        let (items, total_count) = match query.limit {
            Limit::Count(limit) => {
                let params = query.page_params(query.offset, limit);
                self.list_page(service, path, key, &params).await?
            }
            Limit::All => {
                collect_all(query.offset, self.page_size, |offset, limit| {
                    let params = query.page_params(offset, limit);
                    async move { self.list_page(service, path, key, &params).await }
                })
                .await?
            }
        };

        Ok(ListResult {
            items,
            offset: query.offset,
            limit: query.limit.as_i64(),
            total_count,
        })
    }
}
