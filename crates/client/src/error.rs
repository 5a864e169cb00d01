//! Error types for the EdgeX client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during EdgeX client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Input rejected before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Connection, timeout or protocol failure from the HTTP stack.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status returned by an EdgeX service.
    #[error("API error ({status}) at {url}: {message}")]
    Remote {
        status: u16,
        url: String,
        message: String,
    },

    /// The named resource does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The response body did not have the expected shape.
    #[error("Invalid response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status of a remote failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// True for gateway and availability failures (502, 503, 504).
    pub fn is_unavailable(&self) -> bool {
        matches!(self.status(), Some(502..=504))
    }

    /// True when the server could not be reached or did not answer in time.
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout(),
            Self::InvalidUrl(_) => true,
            _ => false,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reported_for_remote_and_not_found() {
        let err = ClientError::Remote {
            status: 503,
            url: "http://localhost:59880/api/v2/event/all".to_string(),
            message: "unavailable".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert!(err.is_unavailable());

        assert_eq!(ClientError::NotFound("device 'x'".into()).status(), Some(404));
        assert_eq!(ClientError::validation("bad").status(), None);
    }

    #[test]
    fn test_remote_display_includes_url_and_message() {
        let err = ClientError::Remote {
            status: 409,
            url: "http://localhost:59881/api/v2/device".to_string(),
            message: "device name already exists".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("409"));
        assert!(text.contains("/api/v2/device"));
        assert!(text.contains("already exists"));
    }

    #[test]
    fn test_invalid_url_is_connection_error() {
        assert!(ClientError::InvalidUrl("http://".into()).is_connection_error());
        assert!(!ClientError::NotFound("x".into()).is_connection_error());
    }
}
