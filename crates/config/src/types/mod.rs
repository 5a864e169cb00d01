//! Configuration type definitions for edgex-cli.
//!
//! Responsibilities:
//! - Define the service registry and the resolved connection config.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - Network access (see client crate).

mod connection;
mod service;

pub use connection::Config;
pub use service::{ServiceEndpoint, ServiceName, ServiceRegistry};
