//! Caller-facing rendering of core errors.
//!
//! Quota and rate-limit failures from the providers get a dedicated message.
//! Outside development, long or JSON-shaped messages (raw provider payloads)
//! are replaced with a generic one; short messages pass through.

use crate::analysis::{AnalysisError, UpstreamError};
use crate::config::AppEnv;
use serde::Serialize;

pub const LIMIT_REACHED_MESSAGE: &str = "AI usage limit reached. Please try again later.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Analysis failed. Please try again later.";

/// Messages longer than this are masked outside development.
pub const MAX_PASSTHROUGH_LEN: usize = 200;

const QUOTA_MARKERS: [&str; 5] = [
    "quota",
    "429",
    "resource_exhausted",
    "resource exhausted",
    "rate limit",
];

/// Whether an error message reads like a quota or rate-limit rejection.
#[must_use]
pub fn is_quota_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    QUOTA_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn looks_like_payload(message: &str) -> bool {
    let trimmed = message.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[') || message.contains("{\"")
}

fn is_quota_error(err: &AnalysisError) -> bool {
    err.upstream_message()
        .is_some_and(|message| is_quota_message(&message))
}

/// HTTP status for an error.
#[must_use]
pub fn status_code(err: &AnalysisError) -> u16 {
    match err {
        AnalysisError::NotFound(_) => 404,
        AnalysisError::Unauthorized => 403,
        AnalysisError::InvalidUrl(_) | AnalysisError::Validation(_) => 400,
        AnalysisError::Upstream(_) if is_quota_error(err) => 429,
        AnalysisError::Upstream(UpstreamError::GitHub(e)) if e.is_not_found() => 404,
        _ => 500,
    }
}

/// Message safe to show the caller in `env`.
#[must_use]
pub fn user_message(err: &AnalysisError, env: AppEnv) -> String {
    if is_quota_error(err) {
        return LIMIT_REACHED_MESSAGE.to_string();
    }

    let message = err.to_string();
    if env.is_development() {
        return message;
    }
    if message.chars().count() > MAX_PASSTHROUGH_LEN || looks_like_payload(&message) {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}

/// `{ "success": false, "error": ... }` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// Status and body for an error.
#[must_use]
pub fn render(err: &AnalysisError, env: AppEnv) -> (u16, ErrorBody) {
    (
        status_code(err),
        ErrorBody {
            success: false,
            error: user_message(err, env),
        },
    )
}
