//! Serde helpers for EdgeX partial updates.
//!
//! Responsibilities:
//! - Tell an absent field apart from one explicitly set to `null`.
//!
//! Invariants / assumptions:
//! - Use together with `#[serde(default)]` so an absent field stays `None`.
//! - A present `null` becomes `Some(Value::Null)` and is serialized back as `null`,
//!   which EdgeX treats as "clear this field".

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize any present value, `null` included, as `Some`.
pub fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
