use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::place::{Place, TeamId};

/// Failures reported by a place storage adapter
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record matched the team-scoped lookup
    #[error("record not found")]
    NotFound,

    /// The write would break the unique `(name, team_id)` constraint
    #[error("duplicate key")]
    DuplicateKey,

    /// The stored version differs from the one the caller read
    #[error("version conflict")]
    VersionConflict,

    /// Any other storage failure, with the adapter's diagnostic text
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Repository trait for the Place aggregate
///
/// Every method is scoped by team: a place owned by another team behaves
/// exactly as if it did not exist.
///
/// Implementations must enforce uniqueness of `(name, team_id)`.
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Find all places for a team, ordered by name bytes
    async fn find_all(&self, team_id: &TeamId) -> Result<Vec<Place>, RepositoryError>;

    /// Find one place by team and ID
    async fn find_one(&self, team_id: &TeamId, id: Uuid) -> Result<Option<Place>, RepositoryError>;

    /// Insert a new place
    async fn insert(&self, place: &Place) -> Result<(), RepositoryError>;

    /// Replace the stored record with `place`
    ///
    /// The write only happens if the stored version equals
    /// `expected_version`; otherwise `VersionConflict` is returned.
    async fn replace(&self, place: &Place, expected_version: i64) -> Result<(), RepositoryError>;

    /// Delete a place by team and ID
    async fn delete(&self, team_id: &TeamId, id: Uuid) -> Result<(), RepositoryError>;
}
