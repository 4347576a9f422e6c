//! Errors raised by the analysis core.
//!
//! Reads answer `NotFound` both when a record is absent and when it belongs
//! to someone else. Mutations on an analysis (delete, share, revoke, ask)
//! answer `Unauthorized` when the analysis exists but its repository is not
//! the caller's.

use crate::gemini::GeminiError;
use crate::github::GitHubError;
use crate::store::StoreError;
use crate::validation::ValidationError;
use std::fmt;
use thiserror::Error;

/// Record kind named in `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Repository,
    Analysis,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Repository => "Repository",
            Resource::Analysis => "Analysis",
        })
    }
}

/// Failure of a remote API call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(transparent)]
    GitHub(GitHubError),

    #[error(transparent)]
    Gemini(#[from] GeminiError),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0} not found")]
    NotFound(Resource),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid GitHub repository URL: {0}")]
    InvalidUrl(String),

    #[error("AI returned invalid JSON: {0}")]
    InvalidModelOutput(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl AnalysisError {
    /// Message of the underlying provider error, for quota detection.
    #[must_use]
    pub fn upstream_message(&self) -> Option<String> {
        match self {
            AnalysisError::Upstream(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

impl From<GitHubError> for AnalysisError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::InvalidUrl(url) => AnalysisError::InvalidUrl(url),
            other => AnalysisError::Upstream(UpstreamError::GitHub(other)),
        }
    }
}

impl From<GeminiError> for AnalysisError {
    fn from(e: GeminiError) -> Self {
        AnalysisError::Upstream(UpstreamError::Gemini(e))
    }
}
