use super::events::PlaceEvent;
use super::value_objects::{PlaceName, PlaceUpdate, TeamId};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Place aggregate root
///
/// A venue a team may go to for lunch, along with the visit/skip history
/// that drives which places are proposed.
///
/// # Invariants
/// - A place belongs to exactly one team, fixed at creation
/// - `visit_count` and `skip_count` never decrease
/// - `last_visited` and `last_skipped` never move backwards; `None` means never
/// - `version` increases by one on every mutation
///
/// # Example
/// ```
/// use lunch_api::domain::place::Place;
/// use lunch_api::domain::place::value_objects::{PlaceName, TeamId};
///
/// let now = chrono::Utc::now();
/// let (mut place, _event) = Place::new(
///     TeamId::new("T1").unwrap(),
///     PlaceName::new("Deli").unwrap(),
///     now,
/// );
///
/// place.visit(now);
/// assert_eq!(place.visit_count(), 1);
/// assert_eq!(place.last_visited(), Some(now));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    id: Uuid,
    team_id: TeamId,
    name: PlaceName,
    last_visited: Option<DateTime<Utc>>,
    last_skipped: Option<DateTime<Utc>>,
    visit_count: i64,
    skip_count: i64,
    version: i64,
    created_at: DateTime<Utc>,
}

impl Place {
    /// Creates a new Place that has never been visited or skipped
    ///
    /// # Returns
    /// The new place and its `Added` event
    pub fn new(team_id: TeamId, name: PlaceName, now: DateTime<Utc>) -> (Self, PlaceEvent) {
        let place = Self {
            id: Uuid::new_v4(),
            team_id,
            name,
            last_visited: None,
            last_skipped: None,
            visit_count: 0,
            skip_count: 0,
            version: 0,
            created_at: now,
        };

        let event = PlaceEvent::Added {
            place_id: place.id,
            team_id: place.team_id.clone(),
            name: place.name.clone(),
        };

        (place, event)
    }

    /// Records that the team accepted this place
    ///
    /// # Business Rules
    /// - Increments the visit count
    /// - Moves `last_visited` to `now` unless it is already later
    pub fn visit(&mut self, now: DateTime<Utc>) -> PlaceEvent {
        let at = advance(self.last_visited, now);
        self.last_visited = Some(at);
        self.visit_count += 1;
        self.version += 1;

        PlaceEvent::Visited {
            place_id: self.id,
            team_id: self.team_id.clone(),
            at,
            visit_count: self.visit_count,
        }
    }

    /// Records that the team declined this place
    ///
    /// # Business Rules
    /// - Increments the skip count
    /// - Moves `last_skipped` to `now` unless it is already later
    pub fn skip(&mut self, now: DateTime<Utc>) -> PlaceEvent {
        let at = advance(self.last_skipped, now);
        self.last_skipped = Some(at);
        self.skip_count += 1;
        self.version += 1;

        PlaceEvent::Skipped {
            place_id: self.id,
            team_id: self.team_id.clone(),
            at,
            skip_count: self.skip_count,
        }
    }

    /// Applies a partial update
    ///
    /// # Returns
    /// The events produced; empty when nothing changed, in which case the
    /// version is left alone.
    pub fn apply(&mut self, update: PlaceUpdate) -> Vec<PlaceEvent> {
        let mut events = Vec::new();

        if let Some(name) = update.name {
            if name != self.name {
                let from = std::mem::replace(&mut self.name, name);
                events.push(PlaceEvent::Renamed {
                    place_id: self.id,
                    team_id: self.team_id.clone(),
                    from,
                    to: self.name.clone(),
                });
            }
        }

        if !events.is_empty() {
            self.version += 1;
        }

        events
    }

    // ===== Getters =====

    /// Returns the place's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team that owns this place
    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    /// Returns the place's display name
    pub fn name(&self) -> &PlaceName {
        &self.name
    }

    /// Returns when the place was last visited, if ever
    pub fn last_visited(&self) -> Option<DateTime<Utc>> {
        self.last_visited
    }

    /// Returns when the place was last skipped, if ever
    pub fn last_skipped(&self) -> Option<DateTime<Utc>> {
        self.last_skipped
    }

    pub fn visit_count(&self) -> i64 {
        self.visit_count
    }

    pub fn skip_count(&self) -> i64 {
        self.skip_count
    }

    /// Returns the optimistic concurrency version
    pub fn version(&self) -> i64 {
        self.version
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Place from persistence layer data
    ///
    /// This method bypasses business rules validation since the data
    /// is already validated and stored in the database.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        team_id: TeamId,
        name: PlaceName,
        last_visited: Option<DateTime<Utc>>,
        last_skipped: Option<DateTime<Utc>>,
        visit_count: i64,
        skip_count: i64,
        version: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            team_id,
            name,
            last_visited,
            last_skipped,
            visit_count,
            skip_count,
            version,
            created_at,
        }
    }
}

fn advance(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    previous.map_or(now, |prev| prev.max(now))
}
