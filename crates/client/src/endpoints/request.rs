//! Single-shot request execution.
//!
//! Sends a prepared `reqwest::RequestBuilder` once and returns the raw body.
//! Non-2xx statuses are turned into `ClientError::Remote`, using the
//! `message` field of the EdgeX error body when one is present.

use reqwest::RequestBuilder;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Error body returned by EdgeX services.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Sends the request and returns the response body bytes.
///
/// # Errors
///
/// Returns `ClientError::Transport` when the request cannot be sent or the
/// body cannot be read, and `ClientError::Remote` for any non-success status.
pub async fn send_request(builder: RequestBuilder, method: &str, url: &str) -> Result<Vec<u8>> {
    debug!(method, url, "sending request");

    let response = builder.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        debug!(method, url, status = status.as_u16(), bytes = body.len(), "request succeeded");
        return Ok(body.to_vec());
    }

    let status = status.as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody { message: Some(m) }) if !m.trim().is_empty() => m,
        _ if body.trim().is_empty() => format!("HTTP {status}"),
        _ => body,
    };

    debug!(method, %url, status, %message, "request failed");
    Err(ClientError::Remote {
        status,
        url,
        message,
    })
}
