//! Repository registration and lookup.

use crate::analysis::access::owned_repository;
use crate::analysis::error::AnalysisResult;
use crate::analysis::signals::{SignalSource, resolve_repository};
use crate::github::TreeEntry;
use crate::store::{NewRepository, RecordId, RepositoryRecord, Store, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Tree entries returned with a registration.
pub const OVERVIEW_TREE_ENTRIES: usize = 200;

/// Freshly fetched view of a repository, returned on every registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryOverview {
    pub file_tree: Vec<TreeEntry>,
    pub languages: Vec<String>,
    pub default_branch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredRepository {
    pub repository: RepositoryRecord,
    pub metadata: RepositoryOverview,
}

#[derive(Clone)]
pub struct RepositoryService {
    store: Arc<dyn Store>,
    signals: Arc<dyn SignalSource>,
}

impl RepositoryService {
    pub fn new(store: Arc<dyn Store>, signals: Arc<dyn SignalSource>) -> Self {
        Self { store, signals }
    }

    /// Register `repo_url` for `user_id`.
    ///
    /// Idempotent per `(user, url)`: a second registration returns the
    /// existing record, with metadata fetched again.
    pub async fn register_repository(
        &self,
        user_id: &UserId,
        repo_url: &str,
    ) -> AnalysisResult<RegisteredRepository> {
        let source = self.signals.as_ref();
        let (slug, metadata) = resolve_repository(source, repo_url).await?;
        let tree = source.file_tree(&slug, &metadata.default_branch).await?;
        let languages = source.languages(&slug).await?;

        let overview = RepositoryOverview {
            file_tree: tree.into_iter().take(OVERVIEW_TREE_ENTRIES).collect(),
            languages: languages.names().map(str::to_string).collect(),
            default_branch: metadata.default_branch,
        };

        let repository = match self.store.find_repository_by_url(user_id, repo_url).await? {
            Some(existing) => existing,
            None => {
                let created = self
                    .store
                    .insert_repository(NewRepository {
                        user_id: user_id.clone(),
                        repo_url: repo_url.to_string(),
                        repo_name: metadata.full_name,
                    })
                    .await?;
                log::info!("repository {} registered as {}", created.repo_name, created.id);
                created
            }
        };

        Ok(RegisteredRepository {
            repository,
            metadata: overview,
        })
    }

    pub async fn get_repository(
        &self,
        repository_id: &RecordId,
        user_id: &UserId,
    ) -> AnalysisResult<RepositoryRecord> {
        Ok(owned_repository(self.store.as_ref(), repository_id, user_id)
            .await?
            .into_record())
    }

    /// The caller's repositories, newest first.
    pub async fn list_repositories(&self, user_id: &UserId) -> AnalysisResult<Vec<RepositoryRecord>> {
        Ok(self.store.list_repositories(user_id).await?)
    }
}
