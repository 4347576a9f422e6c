//! Ownership checks.
//!
//! Authorization is derived by following analysis -> repository -> owner on
//! every call; no owner id is stored on analyses. The handles below can only
//! be obtained through these checks.

use crate::analysis::error::{AnalysisError, AnalysisResult, Resource};
use crate::store::{AnalysisRecord, RecordId, RepositoryRecord, Store, UserId};

/// A repository the caller owns.
#[derive(Debug, Clone)]
pub struct OwnedRepository(RepositoryRecord);

impl OwnedRepository {
    #[must_use]
    pub fn record(&self) -> &RepositoryRecord {
        &self.0
    }

    #[must_use]
    pub fn into_record(self) -> RepositoryRecord {
        self.0
    }
}

/// An analysis whose parent repository the caller owns.
#[derive(Debug, Clone)]
pub struct OwnedAnalysis {
    analysis: AnalysisRecord,
    repository: RepositoryRecord,
}

impl OwnedAnalysis {
    #[must_use]
    pub fn analysis(&self) -> &AnalysisRecord {
        &self.analysis
    }

    #[must_use]
    pub fn repository(&self) -> &RepositoryRecord {
        &self.repository
    }
}

/// Read-style check: a repository owned by someone else is reported exactly
/// like a missing one.
pub async fn owned_repository(
    store: &dyn Store,
    repository_id: &RecordId,
    user_id: &UserId,
) -> AnalysisResult<OwnedRepository> {
    match store.find_repository(repository_id).await? {
        Some(repository) if &repository.user_id == user_id => Ok(OwnedRepository(repository)),
        _ => Err(AnalysisError::NotFound(Resource::Repository)),
    }
}

/// Mutation-style check: `NotFound` when the analysis is missing,
/// `Unauthorized` when its repository is missing or not the caller's.
pub async fn owned_analysis(
    store: &dyn Store,
    analysis_id: &RecordId,
    user_id: &UserId,
) -> AnalysisResult<OwnedAnalysis> {
    let analysis = store
        .find_analysis(analysis_id)
        .await?
        .ok_or(AnalysisError::NotFound(Resource::Analysis))?;

    match store.find_repository(&analysis.repository_id).await? {
        Some(repository) if &repository.user_id == user_id => Ok(OwnedAnalysis {
            analysis,
            repository,
        }),
        _ => Err(AnalysisError::Unauthorized),
    }
}
