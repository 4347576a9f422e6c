//! Repositories API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::types::{LanguageHistogram, RepositoryMetadata, TreeEntry};
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Get full name and default branch
    pub fn get_repository_metadata(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<RepositoryMetadata, GitHubError>> {
        crate::github::get_repository::get_repository_metadata(self.inner.clone(), owner, repo)
    }

    /// Get the recursive file tree at the head of a branch
    pub fn get_recursive_tree(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> AsyncTask<Result<Vec<TreeEntry>, GitHubError>> {
        crate::github::get_tree::get_recursive_tree(self.inner.clone(), owner, repo, branch)
    }

    /// List language byte counts
    pub fn list_languages(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<LanguageHistogram, GitHubError>> {
        crate::github::list_languages::list_languages(self.inner.clone(), owner, repo)
    }

    /// Get the decoded text of a single file
    pub fn get_file_text(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
        ref_name: Option<String>,
    ) -> AsyncTask<Result<Option<String>, GitHubError>> {
        crate::github::get_file_contents::get_file_text(
            self.inner.clone(),
            owner,
            repo,
            path,
            ref_name,
        )
    }
}
