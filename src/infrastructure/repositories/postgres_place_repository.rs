use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::place::{Place, PlaceName, TeamId};
use crate::domain::repositories::{PlaceRepository, RepositoryError};

const PLACE_COLUMNS: &str = "id, team_id, name, last_visited, last_skipped, \
                             visit_count, skip_count, version, created_at";

/// PostgreSQL implementation of PlaceRepository
///
/// Relies on the `places` table from `migrations/`, which carries the
/// unique `(name, team_id)` constraint and the `team_id` index.
pub struct PostgresPlaceRepository {
    pool: PgPool,
}

impl PostgresPlaceRepository {
    /// Creates a new PostgresPlaceRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PlaceRow {
    id: Uuid,
    team_id: String,
    name: String,
    last_visited: Option<DateTime<Utc>>,
    last_skipped: Option<DateTime<Utc>>,
    visit_count: i64,
    skip_count: i64,
    version: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<PlaceRow> for Place {
    type Error = RepositoryError;

    fn try_from(r: PlaceRow) -> Result<Self, Self::Error> {
        let team_id = TeamId::new(r.team_id)
            .map_err(|e| RepositoryError::Storage(format!("Invalid team id from database: {}", e)))?;
        let name = PlaceName::new(r.name)
            .map_err(|e| RepositoryError::Storage(format!("Invalid name from database: {}", e)))?;

        Ok(Place::from_persistence(
            r.id,
            team_id,
            name,
            r.last_visited,
            r.last_skipped,
            r.visit_count,
            r.skip_count,
            r.version,
            r.created_at,
        ))
    }
}

fn classify(context: &str, e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::DuplicateKey,
        _ => RepositoryError::Storage(format!("{}: {}", context, e)),
    }
}

#[async_trait]
impl PlaceRepository for PostgresPlaceRepository {
    async fn find_all(&self, team_id: &TeamId) -> Result<Vec<Place>, RepositoryError> {
        let rows: Vec<PlaceRow> = sqlx::query_as(&format!(
            "SELECT {} FROM places WHERE team_id = $1 ORDER BY name COLLATE \"C\"",
            PLACE_COLUMNS
        ))
        .bind(team_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify("Failed to find places by team", e))?;

        rows.into_iter().map(Place::try_from).collect()
    }

    async fn find_one(&self, team_id: &TeamId, id: Uuid) -> Result<Option<Place>, RepositoryError> {
        let row: Option<PlaceRow> = sqlx::query_as(&format!(
            "SELECT {} FROM places WHERE team_id = $1 AND id = $2",
            PLACE_COLUMNS
        ))
        .bind(team_id.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify("Failed to find place by id", e))?;

        row.map(Place::try_from).transpose()
    }

    async fn insert(&self, place: &Place) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO places (
                id, team_id, name, last_visited, last_skipped,
                visit_count, skip_count, version, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(place.id())
        .bind(place.team_id().as_str())
        .bind(place.name().as_str())
        .bind(place.last_visited())
        .bind(place.last_skipped())
        .bind(place.visit_count())
        .bind(place.skip_count())
        .bind(place.version())
        .bind(place.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| classify("Failed to insert place", e))?;

        Ok(())
    }

    async fn replace(&self, place: &Place, expected_version: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE places SET
                name = $4,
                last_visited = $5,
                last_skipped = $6,
                visit_count = $7,
                skip_count = $8,
                version = $9
            WHERE id = $1 AND team_id = $2 AND version = $3
            "#,
        )
        .bind(place.id())
        .bind(place.team_id().as_str())
        .bind(expected_version)
        .bind(place.name().as_str())
        .bind(place.last_visited())
        .bind(place.last_skipped())
        .bind(place.visit_count())
        .bind(place.skip_count())
        .bind(place.version())
        .execute(&self.pool)
        .await
        .map_err(|e| classify("Failed to update place", e))?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // Nothing matched: either the place is gone or someone else wrote first.
        let exists: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM places WHERE id = $1 AND team_id = $2")
                .bind(place.id())
                .bind(place.team_id().as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| classify("Failed to check place existence", e))?;

        match exists {
            Some(_) => Err(RepositoryError::VersionConflict),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, team_id: &TeamId, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM places WHERE team_id = $1 AND id = $2")
            .bind(team_id.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify("Failed to delete place", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
