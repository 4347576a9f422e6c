//! Gemini API error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    /// Transport-level failure
    #[error("Gemini request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status; `body` is the raw provider payload
    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Response body was not a `generateContent` response
    #[error("Failed to decode Gemini response: {0}")]
    Decode(String),

    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

pub type GeminiResult<T> = Result<T, GeminiError>;
