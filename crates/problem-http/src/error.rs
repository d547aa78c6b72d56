//! HTTP error types for problem parsing.

use thiserror::Error;

/// Errors from the client-side problem parsing helpers.
///
/// A response that simply carries no problem body is not an error; the
/// parsing helpers report that case as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ProblemHttpError {
    #[error("Failed to decode problem details: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}
