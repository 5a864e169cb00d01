//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs).
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT (128 + SIGINT).

use edgex_client::ClientError;
use edgex_config::ConfigError;

use crate::input::InputError;

/// Structured exit codes for edgex-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Connection refused, timeout, or an unusable service URL.
    ConnectionError = 3,

    /// The named device, profile, interval, ... does not exist.
    NotFound = 4,

    /// Bad flags, bad input file, HTTP 400, or an undecodable response.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// HTTP 502, 503 or 504.
    ServiceUnavailable = 8,

    /// Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Validation(_) | ClientError::Decode { .. } => ExitCode::ValidationError,
            ClientError::NotFound(_) => ExitCode::NotFound,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::Remote { status, .. } => match status {
                400 => ExitCode::ValidationError,
                404 => ExitCode::NotFound,
                502..=504 => ExitCode::ServiceUnavailable,
                _ => ExitCode::GeneralError,
            },
            ClientError::Transport(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else if e.is_decode() {
                    ExitCode::ValidationError
                } else {
                    ExitCode::GeneralError
                }
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.is::<InputError>() || cause.is::<ConfigError>() {
                return ExitCode::ValidationError;
            }
        }
        ExitCode::GeneralError
    }
}
