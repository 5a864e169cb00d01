//! JSON envelope handling.
//!
//! EdgeX wraps every payload: list responses put items under a plural key
//! (`"devices"`), single lookups under a singular key (`"device"`), and
//! write requests expect `[{"apiVersion": "v2", "<key>": {...}}]`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};
use edgex_config::constants::API_VERSION;

/// Decode a whole response body.
pub fn decode_body<T: DeserializeOwned>(body: &[u8], url: &str) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| ClientError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Decode the value stored under `key` in a response object.
///
/// A missing or `null` key decodes as JSON `null`, so list keys should be
/// requested as `Option<Vec<T>>` when the server may omit empty arrays.
pub fn decode_field<T: DeserializeOwned>(body: &[u8], key: &str, url: &str) -> Result<T> {
    let mut root: Map<String, Value> = decode_body(body, url)?;
    let value = root.remove(key).unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| ClientError::Decode {
        url: url.to_string(),
        message: format!("field '{key}': {e}"),
    })
}

/// Wrap an item in the `{"apiVersion": "v2", "<key>": item}` request envelope.
pub fn request_envelope<T: Serialize>(key: &str, item: &T) -> Result<Value> {
    let item = serde_json::to_value(item)
        .map_err(|e| ClientError::validation(format!("cannot serialize request: {e}")))?;
    let mut envelope = Map::new();
    envelope.insert("apiVersion".to_string(), Value::String(API_VERSION.to_string()));
    envelope.insert(key.to_string(), item);
    Ok(Value::Object(envelope))
}
