// src/search/error.rs
// =============================================================================
// The one way a query can fail.
//
// A QueryFailure never leaves the query stage: `search::query` logs it and
// hands the pipeline `None`, which renders as an empty result list.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryFailure {
    /// Could not reach the endpoint or read the body
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered, but not with a success status
    #[error("endpoint returned HTTP {0}")]
    Status(StatusCode),

    /// The body was not a search envelope
    #[error("could not parse response: {0}")]
    Parse(#[from] serde_json::Error),
}
