//! Shape validation of external input.
//!
//! Runs at the boundary, before the core sees any value.

use crate::analysis::LanguageCode;
use crate::store::RecordId;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Longest follow-up question accepted, in characters.
pub const MAX_QUESTION_CHARS: usize = 2000;

/// Shortest password accepted at registration, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

lazy_static! {
    static ref GITHUB_REPO_URL: Result<Regex, regex::Error> =
        Regex::new(r"^https?://(www\.)?github\.com/[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+/?$");
    static ref EMAIL: Result<Regex, regex::Error> =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$");
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A 24-char lowercase hex record id.
pub fn record_id(field: &'static str, raw: &str) -> Result<RecordId, ValidationError> {
    RecordId::parse(raw).ok_or_else(|| ValidationError::new(field, "Invalid ID"))
}

/// A `http(s)://github.com/<owner>/<repo>` URL.
pub fn repo_url(raw: &str) -> Result<String, ValidationError> {
    let pattern = GITHUB_REPO_URL
        .as_ref()
        .map_err(|e| ValidationError::new("repoUrl", format!("pattern unavailable: {e}")))?;
    if pattern.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(ValidationError::new(
            "repoUrl",
            "Must be a valid GitHub repository URL",
        ))
    }
}

/// A plausible email address, returned trimmed.
pub fn email(raw: &str) -> Result<String, ValidationError> {
    let pattern = EMAIL
        .as_ref()
        .map_err(|e| ValidationError::new("email", format!("pattern unavailable: {e}")))?;
    let trimmed = raw.trim();
    if pattern.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::new("email", "Invalid email address"))
    }
}

pub fn password(raw: &str) -> Result<&str, ValidationError> {
    if raw.chars().count() < MIN_PASSWORD_CHARS {
        Err(ValidationError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_CHARS} characters"),
        ))
    } else {
        Ok(raw)
    }
}

/// A non-blank question of at most [`MAX_QUESTION_CHARS`] characters,
/// returned trimmed.
pub fn question(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("question", "Question is required"));
    }
    if trimmed.chars().count() > MAX_QUESTION_CHARS {
        return Err(ValidationError::new("question", "Question too long"));
    }
    Ok(trimmed.to_string())
}

pub fn language(raw: &str) -> Result<LanguageCode, ValidationError> {
    raw.parse::<LanguageCode>()
        .map_err(|e| ValidationError::new("language", e.to_string()))
}

pub fn share_token(raw: &str) -> Result<&str, ValidationError> {
    if raw.is_empty() {
        Err(ValidationError::new("token", "Token is required"))
    } else {
        Ok(raw)
    }
}
