//! Repository signal fetching.
//!
//! A signal is anything gathered about a repository before prompting: its
//! identity, file tree, language histogram and manifest file.

use crate::analysis::error::AnalysisResult;
use crate::github::{
    GitHubClient, GitHubResult, LanguageHistogram, RepoSlug, RepositoryMetadata,
    TreeEntry,
};
use futures::future::BoxFuture;

/// Conventional dependency manifest looked up at the default branch.
pub const MANIFEST_PATH: &str = "package.json";

/// Source-hosting calls the pipeline depends on.
pub trait SignalSource: Send + Sync {
    fn repository_metadata<'a>(
        &'a self,
        slug: &'a RepoSlug,
    ) -> BoxFuture<'a, GitHubResult<RepositoryMetadata>>;

    fn file_tree<'a>(
        &'a self,
        slug: &'a RepoSlug,
        branch: &'a str,
    ) -> BoxFuture<'a, GitHubResult<Vec<TreeEntry>>>;

    fn languages<'a>(&'a self, slug: &'a RepoSlug) -> BoxFuture<'a, GitHubResult<LanguageHistogram>>;

    /// Decoded text of a plain file, `Ok(None)` if it is not one.
    fn file_text<'a>(
        &'a self,
        slug: &'a RepoSlug,
        path: &'a str,
        reference: &'a str,
    ) -> BoxFuture<'a, GitHubResult<Option<String>>>;
}

impl SignalSource for GitHubClient {
    fn repository_metadata<'a>(
        &'a self,
        slug: &'a RepoSlug,
    ) -> BoxFuture<'a, GitHubResult<RepositoryMetadata>> {
        Box::pin(async move { self.get_repository_metadata(&slug.owner, &slug.repo).await? })
    }

    fn file_tree<'a>(
        &'a self,
        slug: &'a RepoSlug,
        branch: &'a str,
    ) -> BoxFuture<'a, GitHubResult<Vec<TreeEntry>>> {
        Box::pin(async move { self.get_recursive_tree(&slug.owner, &slug.repo, branch).await? })
    }

    fn languages<'a>(
        &'a self,
        slug: &'a RepoSlug,
    ) -> BoxFuture<'a, GitHubResult<LanguageHistogram>> {
        Box::pin(async move { self.list_languages(&slug.owner, &slug.repo).await? })
    }

    fn file_text<'a>(
        &'a self,
        slug: &'a RepoSlug,
        path: &'a str,
        reference: &'a str,
    ) -> BoxFuture<'a, GitHubResult<Option<String>>> {
        Box::pin(async move {
            self.get_file_text(&slug.owner, &slug.repo, path, Some(reference.to_string()))
                .await?
        })
    }
}

/// Everything known about a repository at prompt time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySignals {
    pub metadata: RepositoryMetadata,
    pub tree: Vec<TreeEntry>,
    pub languages: LanguageHistogram,
    pub manifest: Option<String>,
}

/// Resolve `repo_url` and fetch its metadata.
///
/// Later calls address the repository by the canonical full name GitHub
/// reports, which follows renames and transfers.
pub async fn resolve_repository(
    source: &dyn SignalSource,
    repo_url: &str,
) -> AnalysisResult<(RepoSlug, RepositoryMetadata)> {
    let parsed = RepoSlug::parse(repo_url)?;
    let metadata = source.repository_metadata(&parsed).await?;
    let slug = RepoSlug::from_full_name(&metadata.full_name).unwrap_or(parsed);
    Ok((slug, metadata))
}

/// Best-effort manifest lookup; never fails.
pub async fn fetch_manifest(
    source: &dyn SignalSource,
    slug: &RepoSlug,
    reference: &str,
) -> Option<String> {
    match source.file_text(slug, MANIFEST_PATH, reference).await {
        Ok(text) => text,
        Err(e) if e.is_not_found() => None,
        Err(e) => {
            log::warn!("manifest lookup for {slug}@{reference} failed: {e}");
            None
        }
    }
}

/// Fetch metadata, tree, languages and manifest for `repo_url`, in that order.
pub async fn gather_signals(
    source: &dyn SignalSource,
    repo_url: &str,
) -> AnalysisResult<RepositorySignals> {
    let (slug, metadata) = resolve_repository(source, repo_url).await?;
    let tree = source.file_tree(&slug, &metadata.default_branch).await?;
    let languages = source.languages(&slug).await?;
    let manifest = fetch_manifest(source, &slug, &metadata.default_branch).await;

    log::debug!(
        "signals for {slug}: {} tree entries, {} languages, manifest {}",
        tree.len(),
        languages.len(),
        if manifest.is_some() { "found" } else { "absent" }
    );

    Ok(RepositorySignals {
        metadata,
        tree,
        languages,
        manifest,
    })
}
