//! Error types module
//!
//! Every fallible Imagefy call returns [`ImagefyError`]. The set of variants is
//! deliberately small: input rejected locally, the remote API answered with a
//! non-200 status, the file system failed, or the request never got a response.

use std::io;

/// A parameter failed one of the API's documented constraints.
///
/// Raised before any network call. `field` is the parameter name as the API
/// knows it, `reason` the violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImagefyError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The response body is intentionally not surfaced.
    #[error("Try again later (remote status {status})")]
    Remote { status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ImagefyError {
    pub fn transport(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        ImagefyError::Transport {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Machine-readable error code (e.g. "VALIDATION_ERROR")
    pub fn error_code(&self) -> &'static str {
        match self {
            ImagefyError::Validation(_) => "VALIDATION_ERROR",
            ImagefyError::Remote { .. } => "REMOTE_ERROR",
            ImagefyError::Io(_) => "IO_ERROR",
            ImagefyError::Transport { .. } => "TRANSPORT_ERROR",
            ImagefyError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the caller may retry the same call unchanged.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ImagefyError::Remote { .. } | ImagefyError::Transport { .. }
        )
    }

    /// The offending field, for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ImagefyError::Validation(err) => Some(err.field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImagefyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_field_and_reason() {
        let err = ValidationError::new("background", "must be a hex string color");
        assert_eq!(err.to_string(), "background must be a hex string color");

        let err: ImagefyError = err.into();
        assert_eq!(err.field(), Some("background"));
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(!err.is_retryable());
    }

    #[test]
    fn remote_error_is_generic_and_retryable() {
        let err = ImagefyError::Remote { status: 503 };
        assert!(err.to_string().starts_with("Try again later"));
        assert!(err.is_retryable());
        assert_eq!(err.field(), None);
    }

    #[test]
    fn io_error_converts() {
        let err: ImagefyError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.error_code(), "IO_ERROR");
        assert!(!err.is_retryable());
    }

    #[test]
    fn transport_error_keeps_source() {
        let err = ImagefyError::transport("Failed to send request", anyhow::anyhow!("refused"));
        assert_eq!(err.to_string(), "Failed to send request");
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.is_retryable());
    }
}
