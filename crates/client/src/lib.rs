//! EdgeX Foundry v2 REST API client.
//!
//! This crate provides a typed client for the EdgeX core and support
//! services: generic CRUD over every resource through [`Resource`] and
//! [`ResourceClient`], the resource-specific routes on [`EdgexClient`],
//! and the [`PurgeOrchestrator`] that empties a deployment.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod purge;
pub mod resource;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::builder::EdgexClientBuilder;
pub use client::{EdgexClient, NotificationFilter, ServiceReport, SubscriptionFilter};
pub use error::{ClientError, Result};
pub use purge::{DeleteReport, PurgeEvent, PurgeOrchestrator, PurgeStep};
pub use resource::{Limit, ListQuery, ListResult, Resource, ResourceClient};
