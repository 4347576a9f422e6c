//! GitHub file contents retrieval operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use octocrab::Octocrab;
use octocrab::models::repos::Content;
use std::sync::Arc;

/// Retrieve the decoded text of a single file.
///
/// Resolves to `Ok(None)` when the path names a directory, a symlink or
/// submodule, a file GitHub sent without inline content (over 1 MB), or
/// content that is not valid base64-encoded UTF-8.
pub(crate) fn get_file_text(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    path: impl Into<String>,
    reference: Option<String>,
) -> AsyncTask<Result<Option<String>, GitHubError>> {
    let (owner, repo, path) = (owner.into(), repo.into(), path.into());
    spawn_task(async move {
        let handler = inner.repos(&owner, &repo);
        let mut req = handler.get_content().path(&path);

        if let Some(r) = reference {
            req = req.r#ref(r);
        }

        let content_items = req.send().await.map_err(GitHubError::from)?;

        // A directory listing comes back as a list of its children.
        let [item] = content_items.items.as_slice() else {
            return Ok(None);
        };
        if item.r#type != "file" || item.path != path {
            return Ok(None);
        }

        Ok(decode_text(item))
    })
}

/// Strict decode: octocrab's `decoded_content` panics on bad base64 and
/// replaces invalid UTF-8.
fn decode_text(item: &Content) -> Option<String> {
    let encoded: Vec<u8> = item
        .content
        .as_deref()?
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if encoded.is_empty() {
        return None;
    }

    let bytes = match BASE64_STANDARD.decode(&encoded) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("{} is not valid base64: {e}", item.path);
            return None;
        }
    };
    String::from_utf8(bytes).ok().filter(|text| !text.is_empty())
}
