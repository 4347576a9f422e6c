//! Generative-text API client (Gemini `generateContent`).

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, GeminiClient, GeminiClientBuilder};
pub use error::{GeminiError, GeminiResult};
pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
