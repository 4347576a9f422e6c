//! Store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique index rejected the write
    #[error("Duplicate key in {collection}.{field}")]
    DuplicateKey {
        collection: &'static str,
        field: &'static str,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
