//! In-process `Store` with the same unique indexes as the document store.

use super::{
    AnalysisRecord, NewAnalysis, NewRepository, NewUser, RecordId, RepositoryRecord, ShareGrant,
    Store, StoreError, StoreFuture, UserId, UserRecord,
};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Records are kept with an insertion sequence so that two records created
/// within the same clock tick still order newest-first.
#[derive(Debug, Clone)]
struct Stored<T> {
    seq: u64,
    record: T,
}

#[derive(Debug, Default)]
struct State {
    next_seq: u64,
    users: HashMap<RecordId, Stored<UserRecord>>,
    repositories: HashMap<RecordId, Stored<RepositoryRecord>>,
    analyses: HashMap<RecordId, Stored<AnalysisRecord>>,
}

impl State {
    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

fn newest_first<T: Clone>(
    items: impl Iterator<Item = (DateTime<Utc>, u64, T)>,
) -> Vec<T> {
    let mut items: Vec<_> = items.collect();
    items.sort_by_key(|(created_at, seq, _)| Reverse((*created_at, *seq)));
    items.into_iter().map(|(_, _, record)| record).collect()
}

/// Volatile store for tests and the local binary.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of analyses currently stored.
    pub async fn analysis_count(&self) -> usize {
        self.state.read().await.analyses.len()
    }
}

impl Store for MemoryStore {
    fn insert_user(&self, user: NewUser) -> StoreFuture<'_, UserRecord> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            if state.users.values().any(|u| u.record.email == user.email) {
                return Err(StoreError::DuplicateKey {
                    collection: "users",
                    field: "email",
                });
            }

            let record = UserRecord {
                id: RecordId::generate(),
                email: user.email,
                password_hash: user.password_hash,
                created_at: Utc::now(),
            };
            let seq = state.next_seq();
            state.users.insert(
                record.id.clone(),
                Stored {
                    seq,
                    record: record.clone(),
                },
            );
            Ok(record)
        })
    }

    fn find_user<'a>(&'a self, id: &'a UserId) -> StoreFuture<'a, Option<UserRecord>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(state.users.get(id).map(|s| s.record.clone()))
        })
    }

    fn find_user_by_email<'a>(&'a self, email: &'a str) -> StoreFuture<'a, Option<UserRecord>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(state
                .users
                .values()
                .map(|s| &s.record)
                .find(|u| u.email == email)
                .cloned())
        })
    }

    fn insert_repository(&self, repository: NewRepository) -> StoreFuture<'_, RepositoryRecord> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            let now = Utc::now();
            let record = RepositoryRecord {
                id: RecordId::generate(),
                user_id: repository.user_id,
                repo_url: repository.repo_url,
                repo_name: repository.repo_name,
                analyzed_at: None,
                created_at: now,
                updated_at: now,
            };
            let seq = state.next_seq();
            state.repositories.insert(
                record.id.clone(),
                Stored {
                    seq,
                    record: record.clone(),
                },
            );
            Ok(record)
        })
    }

    fn find_repository<'a>(
        &'a self,
        id: &'a RecordId,
    ) -> StoreFuture<'a, Option<RepositoryRecord>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(state.repositories.get(id).map(|s| s.record.clone()))
        })
    }

    fn find_repository_by_url<'a>(
        &'a self,
        user_id: &'a UserId,
        repo_url: &'a str,
    ) -> StoreFuture<'a, Option<RepositoryRecord>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(state
                .repositories
                .values()
                .map(|s| &s.record)
                .find(|r| &r.user_id == user_id && r.repo_url == repo_url)
                .cloned())
        })
    }

    fn list_repositories<'a>(
        &'a self,
        user_id: &'a UserId,
    ) -> StoreFuture<'a, Vec<RepositoryRecord>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(newest_first(
                state
                    .repositories
                    .values()
                    .filter(|s| &s.record.user_id == user_id)
                    .map(|s| (s.record.created_at, s.seq, s.record.clone())),
            ))
        })
    }

    fn set_repository_analyzed_at<'a>(
        &'a self,
        id: &'a RecordId,
        analyzed_at: DateTime<Utc>,
    ) -> StoreFuture<'a, bool> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            Ok(match state.repositories.get_mut(id) {
                Some(stored) => {
                    stored.record.analyzed_at = Some(analyzed_at);
                    stored.record.updated_at = Utc::now();
                    true
                }
                None => false,
            })
        })
    }

    fn insert_analysis(&self, analysis: NewAnalysis) -> StoreFuture<'_, AnalysisRecord> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            let now = Utc::now();
            let record = AnalysisRecord {
                id: RecordId::generate(),
                repository_id: analysis.repository_id,
                structured_result: analysis.structured_result,
                share_token: None,
                is_public: false,
                created_at: now,
                updated_at: now,
            };
            let seq = state.next_seq();
            state.analyses.insert(
                record.id.clone(),
                Stored {
                    seq,
                    record: record.clone(),
                },
            );
            Ok(record)
        })
    }

    fn find_analysis<'a>(&'a self, id: &'a RecordId) -> StoreFuture<'a, Option<AnalysisRecord>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(state.analyses.get(id).map(|s| s.record.clone()))
        })
    }

    fn latest_analysis<'a>(
        &'a self,
        repository_id: &'a RecordId,
    ) -> StoreFuture<'a, Option<AnalysisRecord>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(state
                .analyses
                .values()
                .filter(|s| &s.record.repository_id == repository_id)
                .max_by_key(|s| (s.record.created_at, s.seq))
                .map(|s| s.record.clone()))
        })
    }

    fn list_analyses<'a>(
        &'a self,
        repository_id: &'a RecordId,
    ) -> StoreFuture<'a, Vec<AnalysisRecord>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(newest_first(
                state
                    .analyses
                    .values()
                    .filter(|s| &s.record.repository_id == repository_id)
                    .map(|s| (s.record.created_at, s.seq, s.record.clone())),
            ))
        })
    }

    fn delete_analysis<'a>(&'a self, id: &'a RecordId) -> StoreFuture<'a, bool> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            Ok(state.analyses.remove(id).is_some())
        })
    }

    fn set_share<'a>(
        &'a self,
        id: &'a RecordId,
        grant: Option<ShareGrant>,
    ) -> StoreFuture<'a, bool> {
        Box::pin(async move {
            let mut state = self.state.write().await;

            if let Some(grant) = &grant {
                let taken = state.analyses.iter().any(|(other, s)| {
                    other != id && s.record.share_token.as_deref() == Some(grant.token.as_str())
                });
                if taken {
                    return Err(StoreError::DuplicateKey {
                        collection: "analyses",
                        field: "shareToken",
                    });
                }
            }

            let Some(stored) = state.analyses.get_mut(id) else {
                return Ok(false);
            };
            match grant {
                Some(grant) => {
                    stored.record.share_token = Some(grant.token);
                    stored.record.is_public = grant.is_public;
                }
                None => {
                    stored.record.share_token = None;
                    stored.record.is_public = false;
                }
            }
            stored.record.updated_at = Utc::now();
            Ok(true)
        })
    }

    fn find_public_by_share_token<'a>(
        &'a self,
        token: &'a str,
    ) -> StoreFuture<'a, Option<AnalysisRecord>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(state
                .analyses
                .values()
                .map(|s| &s.record)
                .find(|a| a.is_public && a.share_token.as_deref() == Some(token))
                .cloned())
        })
    }
}
