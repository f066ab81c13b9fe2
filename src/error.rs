// src/error.rs

use thiserror::Error;

/// Failures of a single model exchange. Every variant renders as a single
/// human-readable line; callers surface it as the assistant's reply and the
/// session keeps running.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please set your API key in settings")]
    MissingApiKey,

    #[error("No model selected")]
    MissingModel,

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status; the raw error body is the message.
    #[error("API returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response format from API")]
    InvalidResponse,
}
