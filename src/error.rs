//! Error types for the hunt smoke tester

use thiserror::Error;

/// Main error type for a smoke run
#[derive(Debug, Error)]
pub enum SmokeError {
    /// The request never produced a response: connection refused, DNS
    /// failure, or the body could not be read off the wire.
    #[error("Transport error during {operation}: {source}")]
    Transport {
        operation: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but its body was not the JSON we had to parse.
    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: String,
    },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl SmokeError {
    pub(crate) fn transport(operation: &str, source: reqwest::Error) -> Self {
        SmokeError::Transport {
            operation: operation.to_string(),
            source,
        }
    }

    pub(crate) fn configuration(field: &str, message: impl Into<String>) -> Self {
        SmokeError::Configuration {
            message: message.into(),
            field: field.to_string(),
        }
    }

    /// Whether this error ends a run the way an unreachable service does.
    ///
    /// Undecodable bodies count: the run cannot continue past a response it
    /// was required to parse.
    pub fn is_transport(&self) -> bool {
        matches!(self, SmokeError::Transport { .. } | SmokeError::Decode { .. })
    }
}

/// Type alias for the main result type used throughout the library
pub type SmokeResult<T> = Result<T, SmokeError>;
