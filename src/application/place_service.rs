use std::sync::Arc;
use uuid::Uuid;

use crate::domain::clock::Clock;
use crate::domain::errors::{PlaceError, PlaceResult};
use crate::domain::place::{eligible_places, Place, PlaceEvent, PlaceName, PlaceUpdate, Selector, TeamId};
use crate::domain::repositories::{PlaceRepository, RepositoryError};

/// Place operations: lifecycle, proposal, and visit/skip transitions
///
/// The service holds no state of its own. Every call reads from and
/// writes to the repository, scoped by team.
///
/// Visit, skip and update are read-modify-write sequences. The write is
/// version-checked, so a concurrent change to the same place surfaces as
/// [`PlaceError::ConcurrentModification`] instead of a lost update. The
/// service does not retry.
#[derive(Clone)]
pub struct PlaceService {
    repo: Arc<dyn PlaceRepository>,
    clock: Arc<dyn Clock>,
    selector: Arc<dyn Selector>,
}

impl PlaceService {
    pub fn new(
        repo: Arc<dyn PlaceRepository>,
        clock: Arc<dyn Clock>,
        selector: Arc<dyn Selector>,
    ) -> Self {
        Self {
            repo,
            clock,
            selector,
        }
    }

    /// Proposes one eligible place for today's lunch
    ///
    /// Has no effect on the chosen place.
    pub async fn propose_place(&self, team_id: &TeamId) -> PlaceResult<Place> {
        let places = self
            .repo
            .find_all(team_id)
            .await
            .map_err(|e| classify("propose_place", e))?;

        let candidates = eligible_places(places, self.clock.now());
        if candidates.is_empty() {
            tracing::info!(team_id = %team_id, "no eligible places to propose");
            return Err(PlaceError::NoEligiblePlaces);
        }

        tracing::debug!(team_id = %team_id, candidates = candidates.len(), "proposing a place");

        self.selector
            .select(&candidates)
            .cloned()
            .ok_or(PlaceError::NoEligiblePlaces)
    }

    /// Records that the team went to a place
    pub async fn visit_place(&self, team_id: &TeamId, id: Uuid) -> PlaceResult<Place> {
        let mut place = self.load(team_id, id, "visit_place").await?;
        let expected = place.version();

        let event = place.visit(self.clock.now());
        self.persist(&place, expected, "visit_place").await?;
        log_event(&event);

        Ok(place)
    }

    /// Records that the team turned a place down
    pub async fn skip_place(&self, team_id: &TeamId, id: Uuid) -> PlaceResult<()> {
        let mut place = self.load(team_id, id, "skip_place").await?;
        let expected = place.version();

        let event = place.skip(self.clock.now());
        self.persist(&place, expected, "skip_place").await?;
        log_event(&event);

        Ok(())
    }

    /// Adds a new place for a team
    ///
    /// Fails with [`PlaceError::DuplicateName`] if the team already has a
    /// place with this name.
    pub async fn add_place(&self, team_id: TeamId, name: PlaceName) -> PlaceResult<Place> {
        let (place, event) = Place::new(team_id, name, self.clock.now());

        self.repo
            .insert(&place)
            .await
            .map_err(|e| classify("add_place", e))?;
        log_event(&event);

        Ok(place)
    }

    pub async fn find_by_id(&self, team_id: &TeamId, id: Uuid) -> PlaceResult<Place> {
        self.load(team_id, id, "find_by_id").await
    }

    /// Returns all of a team's places, ordered by name bytes
    pub async fn all_places(&self, team_id: &TeamId) -> PlaceResult<Vec<Place>> {
        self.repo
            .find_all(team_id)
            .await
            .map_err(|e| classify("all_places", e))
    }

    /// Applies a partial update and returns the resulting place
    ///
    /// An update that changes nothing is not written.
    pub async fn update_place(
        &self,
        team_id: &TeamId,
        id: Uuid,
        update: PlaceUpdate,
    ) -> PlaceResult<Place> {
        let mut place = self.load(team_id, id, "update_place").await?;
        let expected = place.version();

        let events = place.apply(update);
        if events.is_empty() {
            return Ok(place);
        }

        self.persist(&place, expected, "update_place").await?;
        events.iter().for_each(log_event);

        Ok(place)
    }

    pub async fn delete_place(&self, team_id: &TeamId, id: Uuid) -> PlaceResult<()> {
        self.repo
            .delete(team_id, id)
            .await
            .map_err(|e| classify("delete_place", e))?;

        tracing::info!(team_id = %team_id, place_id = %id, "place deleted");
        Ok(())
    }

    async fn load(&self, team_id: &TeamId, id: Uuid, op: &'static str) -> PlaceResult<Place> {
        self.repo
            .find_one(team_id, id)
            .await
            .map_err(|e| classify(op, e))?
            .ok_or(PlaceError::NotFound)
    }

    async fn persist(&self, place: &Place, expected: i64, op: &'static str) -> PlaceResult<()> {
        self.repo
            .replace(place, expected)
            .await
            .map_err(|e| classify(op, e))
    }
}

/// Maps a storage failure onto the error callers see
///
/// Unclassified failures are logged here with their detail and replaced
/// by the generic storage error.
fn classify(op: &'static str, err: RepositoryError) -> PlaceError {
    match err {
        RepositoryError::NotFound => PlaceError::NotFound,
        RepositoryError::DuplicateKey => PlaceError::DuplicateName,
        RepositoryError::VersionConflict => {
            tracing::warn!(op, "place changed concurrently");
            PlaceError::ConcurrentModification
        }
        RepositoryError::Storage(detail) => {
            tracing::error!(op, error = %detail, "storage failure");
            PlaceError::Storage
        }
    }
}

fn log_event(event: &PlaceEvent) {
    tracing::info!(
        event = event.kind(),
        team_id = %event.team_id(),
        place_id = %event.place_id(),
        "place event"
    );
}
