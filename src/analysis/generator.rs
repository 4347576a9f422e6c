//! Generative-text seam.

use crate::gemini::{GeminiClient, GeminiResult};
use futures::future::BoxFuture;

/// Model used for every generation call.
pub const ANALYSIS_MODEL: &str = "gemini-2.5-flash";

/// One prompt in, raw text out. Empty when the provider returned no text.
pub trait TextGenerator: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, GeminiResult<String>>;
}

impl TextGenerator for GeminiClient {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, GeminiResult<String>> {
        Box::pin(async move {
            let text = self.generate_content(ANALYSIS_MODEL, prompt).await?;
            if text.is_none() {
                log::warn!("{ANALYSIS_MODEL} returned no text");
            }
            Ok(text.unwrap_or_default())
        })
    }
}
