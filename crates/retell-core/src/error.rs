//! Error types for Retell.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Rejected input, surfaced to HTTP callers as 400.
    #[error("{0}")]
    Validation(String),

    #[error("Error calling Gemini API: {0}")]
    Reconstruction(String),

    #[error("Error performing web search: {0}")]
    Search(String),

    /// Missing or unusable startup configuration. Fatal: the process
    /// does not start.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
