//! HTTP transport primitives shared by every resource client.
//!
//! Responsibilities:
//! - Execute one request and map non-success statuses to `ClientError`.
//! - Decode EdgeX JSON envelopes into typed values.
//! - Percent-encode user-supplied path segments.
//!
//! Does NOT handle:
//! - Route templates for individual resources (see `crate::resource`).
//! - Retries of any kind: every call is issued exactly once.

pub mod decode;
pub mod request;
pub mod url_encoding;

pub use decode::{decode_body, decode_field, request_envelope};
pub use request::send_request;
pub use url_encoding::encode_path_segment;
