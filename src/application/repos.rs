//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::config::ConfigRecord;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// CRUD seam over the `configs` table.
///
/// Failures propagate to the caller unretried; at this layer "key absent"
/// is `Ok(None)`, never an error.
#[async_trait]
pub trait ConfigsRepo {
    /// Fetch the row for `key`, if one exists.
    async fn find_by_key(&self, key: &str) -> Result<Option<ConfigRecord>, RepoError>;

    /// Insert or update the row for `key` and commit before returning.
    ///
    /// Read-then-write: an existing row is updated in place, otherwise a new
    /// row is inserted. No row lock is taken, so concurrent upserts of one
    /// key interleave with the last commit winning.
    async fn upsert(&self, key: &str, value: &str) -> Result<ConfigRecord, RepoError>;
}
