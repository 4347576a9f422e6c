//! GitHub API error types

use thiserror::Error;
use tokio::sync::oneshot::error::RecvError;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error
    #[error("Octocrab error: {0}")]
    Octocrab(octocrab::Error),

    /// URL does not name a GitHub repository
    #[error("Invalid GitHub repository URL: {0}")]
    InvalidUrl(String),

    /// GitHub answered 404 for the requested resource
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// The spawned request task went away before reporting back
    #[error("Task channel error: {0}")]
    TaskChannel(#[from] RecvError),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// True when GitHub answered 404 for the requested resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, GitHubError::NotFound(_))
    }
}

impl From<octocrab::Error> for GitHubError {
    fn from(e: octocrab::Error) -> Self {
        match e {
            octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404 => {
                GitHubError::NotFound(source.message)
            }
            other => GitHubError::Octocrab(other),
        }
    }
}
