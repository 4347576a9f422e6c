//! GitHub recursive tree retrieval operation.

use crate::github::types::TreeEntry;
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct BranchResponse {
    commit: BranchCommit,
}

#[derive(Debug, Deserialize)]
struct BranchCommit {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    #[serde(default)]
    tree: Vec<TreeNode>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeNode {
    path: Option<String>,
    #[serde(rename = "type")]
    node_type: Option<String>,
}

/// List every entry reachable from the head commit of `branch`.
///
/// Entries that lack a path or a type are dropped. Order is the order
/// GitHub returned.
pub(crate) fn get_recursive_tree(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
) -> AsyncTask<Result<Vec<TreeEntry>, GitHubError>> {
    let (owner, repo, branch) = (owner.into(), repo.into(), branch.into());

    spawn_task(async move {
        let head: BranchResponse = inner
            .get(
                format!(
                    "/repos/{owner}/{repo}/branches/{}",
                    urlencoding::encode(&branch)
                ),
                None::<&()>,
            )
            .await
            .map_err(GitHubError::from)?;

        let sha = head.commit.sha;
        let listing: TreeResponse = inner
            .get(
                format!("/repos/{owner}/{repo}/git/trees/{sha}?recursive=1"),
                None::<&()>,
            )
            .await
            .map_err(GitHubError::from)?;

        if listing.truncated {
            log::debug!("tree listing for {owner}/{repo}@{sha} was truncated by GitHub");
        }

        Ok(listing
            .tree
            .into_iter()
            .filter_map(|node| match (node.path, node.node_type) {
                (Some(path), Some(node_type)) if !path.is_empty() => {
                    Some(TreeEntry::new(path, node_type))
                }
                _ => None,
            })
            .collect())
    })
}
