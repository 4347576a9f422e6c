//! Persistent store seam.
//!
//! The document store owns three collections: users, repositories and
//! analyses. Identifiers and timestamps are assigned by the store. Every
//! single-record update is atomic; nothing spans records.

pub mod error;
pub mod memory;
pub mod records;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use records::{
    AnalysisRecord, NewAnalysis, NewRepository, NewUser, RecordId, RepositoryRecord, ShareGrant,
    UserId, UserRecord,
};

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;

/// Boxed future returned by every store operation.
pub type StoreFuture<'a, T> = BoxFuture<'a, StoreResult<T>>;

/// Create/find/update/delete operations over the three collections.
pub trait Store: Send + Sync {
    // users

    /// Insert a user; fails with `DuplicateKey` when the email is taken.
    fn insert_user(&self, user: NewUser) -> StoreFuture<'_, UserRecord>;

    fn find_user<'a>(&'a self, id: &'a UserId) -> StoreFuture<'a, Option<UserRecord>>;

    fn find_user_by_email<'a>(&'a self, email: &'a str) -> StoreFuture<'a, Option<UserRecord>>;

    // repositories

    fn insert_repository(&self, repository: NewRepository) -> StoreFuture<'_, RepositoryRecord>;

    fn find_repository<'a>(&'a self, id: &'a RecordId)
    -> StoreFuture<'a, Option<RepositoryRecord>>;

    fn find_repository_by_url<'a>(
        &'a self,
        user_id: &'a UserId,
        repo_url: &'a str,
    ) -> StoreFuture<'a, Option<RepositoryRecord>>;

    /// Repositories owned by `user_id`, newest first.
    fn list_repositories<'a>(&'a self, user_id: &'a UserId)
    -> StoreFuture<'a, Vec<RepositoryRecord>>;

    /// Returns whether a record matched.
    fn set_repository_analyzed_at<'a>(
        &'a self,
        id: &'a RecordId,
        analyzed_at: DateTime<Utc>,
    ) -> StoreFuture<'a, bool>;

    // analyses

    fn insert_analysis(&self, analysis: NewAnalysis) -> StoreFuture<'_, AnalysisRecord>;

    fn find_analysis<'a>(&'a self, id: &'a RecordId) -> StoreFuture<'a, Option<AnalysisRecord>>;

    /// Most recently created analysis of a repository.
    fn latest_analysis<'a>(
        &'a self,
        repository_id: &'a RecordId,
    ) -> StoreFuture<'a, Option<AnalysisRecord>>;

    /// Analyses of a repository, newest first.
    fn list_analyses<'a>(&'a self, repository_id: &'a RecordId)
    -> StoreFuture<'a, Vec<AnalysisRecord>>;

    /// Returns whether a record was removed.
    fn delete_analysis<'a>(&'a self, id: &'a RecordId) -> StoreFuture<'a, bool>;

    /// Set (`Some`) or clear (`None`) the share token and public flag in one
    /// update. Fails with `DuplicateKey` if another analysis holds the token.
    fn set_share<'a>(
        &'a self,
        id: &'a RecordId,
        grant: Option<ShareGrant>,
    ) -> StoreFuture<'a, bool>;

    /// The analysis holding `token`, only if it is public.
    fn find_public_by_share_token<'a>(
        &'a self,
        token: &'a str,
    ) -> StoreFuture<'a, Option<AnalysisRecord>>;
}
