//! GitHub repository metadata retrieval operation.

use crate::github::types::{FALLBACK_DEFAULT_BRANCH, RepositoryMetadata};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Fetch the full name and default branch of a repository.
pub(crate) fn get_repository_metadata(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<RepositoryMetadata, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(async move {
        let repository = inner
            .repos(&owner, &repo)
            .get()
            .await
            .map_err(GitHubError::from)?;

        Ok(RepositoryMetadata {
            full_name: repository
                .full_name
                .unwrap_or_else(|| format!("{owner}/{repo}")),
            default_branch: repository
                .default_branch
                .unwrap_or_else(|| FALLBACK_DEFAULT_BRANCH.to_string()),
        })
    })
}
