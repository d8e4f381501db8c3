//! Error types for tldw.

use crate::transcript::TranscriptUnavailable;
use thiserror::Error;

/// Library-level error type for tldw operations.
#[derive(Error, Debug)]
pub enum TldwError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    NoTranscript(#[from] TranscriptUnavailable),

    #[error("No API key provided. Pass --api-key or set the configured environment variable.")]
    MissingCredential,

    #[error("LLM service error: {0}")]
    Service(String),

    #[error("No video loaded. Open a video URL first.")]
    NotReady,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for tldw operations.
pub type Result<T> = std::result::Result<T, TldwError>;
