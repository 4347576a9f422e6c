//! Repository URL parsing.

use crate::github::error::{GitHubError, GitHubResult};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref REPO_URL: Result<Regex, regex::Error> =
        Regex::new(r"^https?://(?:www\.)?github\.com/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?/?$");
}

/// Owner and name of a GitHub repository, as parsed from its URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    /// Parse `https://github.com/<owner>/<repo>`, tolerating a trailing
    /// slash and a `.git` suffix.
    pub fn parse(url: &str) -> GitHubResult<Self> {
        let pattern = REPO_URL
            .as_ref()
            .map_err(|e| GitHubError::ClientSetup(format!("repository URL pattern: {e}")))?;
        let caps = pattern
            .captures(url.trim())
            .ok_or_else(|| GitHubError::InvalidUrl(url.to_string()))?;

        let owner = caps[1].to_string();
        let repo = caps[2].trim_end_matches(".git").to_string();
        if repo.is_empty() {
            return Err(GitHubError::InvalidUrl(url.to_string()));
        }

        Ok(Self { owner, repo })
    }

    /// Split a `owner/name` full name as returned by the repository endpoint.
    #[must_use]
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let (owner, repo) = full_name.split_once('/')?;
        if owner.is_empty() || repo.is_empty() {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
