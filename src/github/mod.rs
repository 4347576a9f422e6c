//! GitHub API operations module
//!
//! Provides the source-hosting calls the analysis pipeline needs, using the
//! octocrab library.

pub mod client;
pub mod error;
pub mod repo_url;
pub mod types;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use repo_url::RepoSlug;
pub use types::{FALLBACK_DEFAULT_BRANCH, LanguageHistogram, RepositoryMetadata, TreeEntry};
pub use util::spawn_task;

// GitHub API operations - Repositories (internal)
pub(crate) mod get_file_contents;
pub(crate) mod get_repository;
pub(crate) mod get_tree;
pub(crate) mod list_languages;
