//! Error types for collaborator operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("launch failed: {0}")]
    LaunchFailed(String),

    #[error("fetch failed: {0}")]
    FetchFailed(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("cancelled")]
    Cancelled,

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
