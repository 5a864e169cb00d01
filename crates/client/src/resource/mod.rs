//! Generic CRUD access to EdgeX resources.
//!
//! Responsibilities:
//! - Describe each resource's routes and envelope keys through the `Resource` trait.
//! - Translate one logical operation into one HTTP request via `ResourceClient`.
//! - Page through "all remaining" listings (`limit = -1`).
//!
//! Does NOT handle:
//! - Resource-specific routes such as counts or age-based deletes (see `crate::client`).
//! - Retries: a failed request is reported as-is.
//!
//! Invariants:
//! - Validation errors are raised before any request is built.
//! - `limit = -1` fetches pages of the client's page size at strictly increasing
//!   offsets and stops at the first empty or short page.
//! - A 404 on a lookup or delete becomes `ClientError::NotFound` naming the key.

mod impls;
mod paging;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::client::EdgexClient;
use crate::endpoints::{decode_body, encode_path_segment, request_envelope};
use crate::error::{ClientError, Result};
use crate::models::{AddOutcome, UpdateOutcome, Validate};
use edgex_config::ServiceName;

pub use paging::{Limit, ListQuery, ListResult, collect_all};

/// Static description of one EdgeX resource type.
pub trait Resource: Serialize + DeserializeOwned + Validate + Sized {
    /// Partial-update DTO sent with PATCH.
    type Update: Serialize + Validate;

    /// Service that owns the resource.
    const SERVICE: ServiceName;
    /// Route segment below `/api/v2`, e.g. `device`.
    const ROUTE: &'static str;
    /// Key of the item array in list responses, e.g. `devices`.
    const COLLECTION_KEY: &'static str;
    /// Key of the item in single responses and write requests, e.g. `device`.
    const ITEM_KEY: &'static str;
    /// Human-readable name used in messages.
    const DISPLAY_NAME: &'static str;

    const BY_NAME: bool = true;
    const BY_ID: bool = false;
    const SUPPORTS_ADD: bool = true;
    const SUPPORTS_UPDATE: bool = true;
    const SUPPORTS_DELETE: bool = true;

    fn list_path() -> String {
        format!("{}/all", Self::ROUTE)
    }

    fn update_path() -> String {
        Self::ROUTE.to_string()
    }

    fn update_key() -> &'static str {
        Self::ITEM_KEY
    }

    fn item_name(&self) -> Option<&str>;

    fn item_id(&self) -> Option<&str>;
}

/// Typed client for one resource type.
pub struct ResourceClient<'a, R> {
    client: &'a EdgexClient,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource> ResourceClient<'a, R> {
    pub(crate) fn new(client: &'a EdgexClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// List items from the resource's default listing route.
    pub async fn list(&self, query: &ListQuery) -> Result<ListResult<R>> {
        self.list_at(&R::list_path(), query).await
    }

    /// List items from any route of this resource that returns the collection key.
    pub async fn list_at(&self, path: &str, query: &ListQuery) -> Result<ListResult<R>> {
        self.client
            .list_collection(R::SERVICE, path, R::COLLECTION_KEY, query)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<R> {
        let path = self.keyed_path("name", name, R::BY_NAME, "lookup by name")?;
        self.client
            .get_field(R::SERVICE, &path, R::ITEM_KEY)
            .await
            .map_err(|e| not_found::<R>(e, name))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<R> {
        let path = self.keyed_path("id", id, R::BY_ID, "lookup by id")?;
        self.client
            .get_field(R::SERVICE, &path, R::ITEM_KEY)
            .await
            .map_err(|e| not_found::<R>(e, id))
    }

    /// Add one item; a non-success outcome is returned as an error.
    pub async fn add(&self, item: &R) -> Result<AddOutcome> {
        let url = self.client.url(R::SERVICE, R::ROUTE)?.to_string();
        let outcome = self
            .add_many(std::slice::from_ref(item))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::Decode {
                url: url.clone(),
                message: "empty response to add request".to_string(),
            })?;
        if outcome.is_success() {
            Ok(outcome)
        } else {
            Err(ClientError::Remote {
                status: outcome.status_code,
                url,
                message: outcome.message.unwrap_or_default(),
            })
        }
    }

    /// Add several items in one request; each item gets its own outcome.
    pub async fn add_many(&self, items: &[R]) -> Result<Vec<AddOutcome>> {
        self.ensure(R::SUPPORTS_ADD, "add")?;
        for item in items {
            item.validate()?;
        }
        let body = envelopes(R::ITEM_KEY, items)?;
        let (bytes, url) = self
            .client
            .execute(reqwest::Method::POST, R::SERVICE, R::ROUTE, &[], Some(&body))
            .await?;
        decode_body(&bytes, &url)
    }

    /// Apply a partial update; a non-success outcome is returned as an error.
    pub async fn update(&self, update: &R::Update) -> Result<UpdateOutcome> {
        let url = self.client.url(R::SERVICE, &R::update_path())?.to_string();
        let outcome = self
            .update_many(std::slice::from_ref(update))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::Decode {
                url: url.clone(),
                message: "empty response to update request".to_string(),
            })?;
        if outcome.is_success() {
            Ok(outcome)
        } else {
            Err(ClientError::Remote {
                status: outcome.status_code,
                url,
                message: outcome.message.unwrap_or_default(),
            })
        }
    }

    pub async fn update_many(&self, updates: &[R::Update]) -> Result<Vec<UpdateOutcome>> {
        self.ensure(R::SUPPORTS_UPDATE, "update")?;
        for update in updates {
            update.validate()?;
        }
        let body = envelopes(R::update_key(), updates)?;
        let (bytes, url) = self
            .client
            .execute(
                reqwest::Method::PATCH,
                R::SERVICE,
                &R::update_path(),
                &[],
                Some(&body),
            )
            .await?;
        decode_body(&bytes, &url)
    }

    pub async fn delete_by_name(&self, name: &str) -> Result<UpdateOutcome> {
        self.ensure(R::SUPPORTS_DELETE, "delete")?;
        let path = self.keyed_path("name", name, R::BY_NAME, "delete by name")?;
        self.client
            .delete(R::SERVICE, &path)
            .await
            .map_err(|e| not_found::<R>(e, name))
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<UpdateOutcome> {
        self.ensure(R::SUPPORTS_DELETE, "delete")?;
        let path = self.keyed_path("id", id, R::BY_ID, "delete by id")?;
        self.client
            .delete(R::SERVICE, &path)
            .await
            .map_err(|e| not_found::<R>(e, id))
    }

    fn ensure(&self, supported: bool, operation: &str) -> Result<()> {
        if supported {
            Ok(())
        } else {
            Err(ClientError::validation(format!(
                "{} does not support {operation}",
                R::DISPLAY_NAME
            )))
        }
    }

    fn keyed_path(&self, kind: &str, key: &str, supported: bool, operation: &str) -> Result<String> {
        self.ensure(supported, operation)?;
        if key.trim().is_empty() {
            return Err(ClientError::validation(format!(
                "{} {kind} must not be empty",
                R::DISPLAY_NAME
            )));
        }
        Ok(format!("{}/{kind}/{}", R::ROUTE, encode_path_segment(key)))
    }
}

fn envelopes<T: Serialize>(key: &str, items: &[T]) -> Result<serde_json::Value> {
    if items.is_empty() {
        return Err(ClientError::validation("no items to send"));
    }
    items
        .iter()
        .map(|item| request_envelope(key, item))
        .collect::<Result<Vec<_>>>()
        .map(serde_json::Value::Array)
}

fn not_found<R: Resource>(err: ClientError, key: &str) -> ClientError {
    match err {
        ClientError::Remote {
            status: 404,
            message,
            ..
        } => ClientError::NotFound(format!("{} '{}' not found: {}", R::DISPLAY_NAME, key, message)),
        other => other,
    }
}
