//! Harness error type.

use absantee_core::PersistenceError;
use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced to tests. None of them are retried.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The host could not be started.
    #[error("Test host failed to start: {0}")]
    Startup(String),

    /// The host did not shut down cleanly.
    #[error("Test host failed to shut down: {0}")]
    Shutdown(String),

    /// Fixture setup or a direct store access failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Connection failure, timeout or body read error.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response did not have the expected status or shape.
    #[error("Unexpected response {status} ({content_type:?}): {body}")]
    HttpProtocol {
        status: StatusCode,
        content_type: Option<String>,
        body: String,
    },

    /// A response body was not the expected JSON.
    #[error("Invalid JSON in response: {0}")]
    Serialization(#[from] serde_json::Error),
}
