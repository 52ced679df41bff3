//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Connection to the device failed
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request did not complete in time
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Device answered with a non-success HTTP status
    #[error("HTTP error: {status} - {body}")]
    HttpStatus { status: u16, body: String },

    /// Backend rejected the command (e.g. invalid parameter)
    #[error("Command {command} failed: {message}")]
    CommandFailed { command: String, message: String },

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration store failure
    #[error("Config store error: {0}")]
    ConfigStoreError(String),

    /// Dot index outside 0..=3
    #[error("Invalid dot index: {0}")]
    InvalidDotIndex(usize),

    /// Invalid endpoint configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No async runtime to run commands on
    #[error("Runtime unavailable: {0}")]
    RuntimeUnavailable(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, backend rejection) and used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::CommandFailed { .. } | Self::InvalidDotIndex(_) | Self::InvalidConfig(_) => true,
            Self::NetworkError(_)
            | Self::Timeout(_)
            | Self::HttpStatus { .. }
            | Self::SerializationError(_)
            | Self::ConfigStoreError(_)
            | Self::RuntimeUnavailable(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Log an error at the level matching [`CoreError::is_expected`].
pub(crate) fn log_error(context: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{context}: {err}");
    } else {
        log::error!("{context}: {err}");
    }
}
