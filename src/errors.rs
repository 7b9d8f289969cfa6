//! Error types for the placeholder loading path.
//!
//! Parse failures are not errors: the parser adapter recovers them locally
//! as `None`, and validation failures are surfaced to the host form as a
//! [`ValidationErrors`](crate::ValidationErrors) object instead.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while fetching the example-number document.
///
/// None of these are fatal to the component: the input degrades to empty
/// placeholders and keeps working.
#[derive(Debug, Error)]
pub enum PlaceholderError {
    /// The HTTP request failed.
    #[error("example-number request failed: {0}")]
    Http(#[from] reqwest_middleware::Error),

    /// The endpoint answered with a non-success status.
    #[error("example-number endpoint returned status {status}")]
    UnexpectedStatus { status: reqwest::StatusCode },

    /// The response body was not a valid example-number document.
    #[error("failed to decode example-number document: {0}")]
    Decode(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("example-number request timed out after {:.1}s", timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    /// The cancellation token fired before the request completed.
    #[error("example-number request was cancelled")]
    Cancelled,
}
