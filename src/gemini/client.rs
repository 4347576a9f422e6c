//! Gemini API client wrapper
//!
//! One request, one response: no retries, no streaming.

use crate::gemini::error::{GeminiError, GeminiResult};
use crate::gemini::types::{GenerateContentRequest, GenerateContentResponse};
use std::fmt;
use std::sync::Arc;

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client. Cloning is cheap (the HTTP pool and credentials are shared).
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Arc<str>,
    base_url: Arc<str>,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GeminiClient {
    #[must_use]
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::new()
    }

    /// Convenience: client against the public endpoint
    pub fn with_api_key(api_key: impl Into<String>) -> GeminiResult<Self> {
        Self::builder().api_key(api_key).build()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `prompt` to `model` and return the response text, if any.
    pub async fn generate_content(&self, model: &str, prompt: &str) -> GeminiResult<Option<String>> {
        let url = format!("{}/models/{model}:generateContent", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &*self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Decode(e.to_string()))?;

        Ok(parsed.text())
    }
}

/// Builder for creating `GeminiClient`
pub struct GeminiClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl GeminiClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
        }
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the endpoint (tests, proxies)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build(self) -> GeminiResult<GeminiClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GeminiError::ClientSetup("API key is required".to_string()))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GeminiError::ClientSetup(e.to_string()))?;

        Ok(GeminiClient {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }
}

impl Default for GeminiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
