use thiserror::Error;

use crate::fetch::FetchError;

/// Top-level error type for pipeline callers.
///
/// Nothing inside discovery or tailoring is fatal (source failures
/// degrade to zero postings for that source); these variants cover the
/// edges where the caller hands us inputs, plus fetch errors surfaced
/// by code that chooses to propagate instead of recover.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
