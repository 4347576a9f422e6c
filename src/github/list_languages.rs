//! GitHub repository language histogram operation.

use crate::github::types::LanguageHistogram;
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde_json::{Map, Value};
use std::sync::Arc;

/// List the languages of a repository with their byte counts.
pub(crate) fn list_languages(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<LanguageHistogram, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(async move {
        let raw: Map<String, Value> = inner
            .get(format!("/repos/{owner}/{repo}/languages"), None::<&()>)
            .await
            .map_err(GitHubError::from)?;

        let pairs = raw
            .into_iter()
            .map(|(language, bytes)| (language, bytes.as_u64().unwrap_or(0)))
            .collect();

        Ok(LanguageHistogram::from_pairs(pairs))
    })
}
