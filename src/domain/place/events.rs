use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::{PlaceName, TeamId};

/// Domain events that occur within the Place aggregate
///
/// Proposing a place is not an event: it leaves the record untouched.
///
/// # Example
/// ```
/// use lunch_api::domain::place::events::PlaceEvent;
/// use lunch_api::domain::place::value_objects::TeamId;
/// use uuid::Uuid;
///
/// let event = PlaceEvent::Visited {
///     place_id: Uuid::new_v4(),
///     team_id: TeamId::new("T1").unwrap(),
///     at: chrono::Utc::now(),
///     visit_count: 1,
/// };
/// assert_eq!(event.kind(), "visited");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceEvent {
    /// Fired when a place is added for a team
    Added {
        place_id: Uuid,
        team_id: TeamId,
        name: PlaceName,
    },
    /// Fired when a team accepts a place for lunch
    Visited {
        place_id: Uuid,
        team_id: TeamId,
        at: DateTime<Utc>,
        /// Visit count after this visit
        visit_count: i64,
    },
    /// Fired when a team declines a place
    Skipped {
        place_id: Uuid,
        team_id: TeamId,
        at: DateTime<Utc>,
        /// Skip count after this skip
        skip_count: i64,
    },
    /// Fired when a place changes its name
    Renamed {
        place_id: Uuid,
        team_id: TeamId,
        from: PlaceName,
        to: PlaceName,
    },
}

impl PlaceEvent {
    /// Returns the place_id for this event
    pub fn place_id(&self) -> Uuid {
        match self {
            PlaceEvent::Added { place_id, .. }
            | PlaceEvent::Visited { place_id, .. }
            | PlaceEvent::Skipped { place_id, .. }
            | PlaceEvent::Renamed { place_id, .. } => *place_id,
        }
    }

    /// Returns the team that owns the place
    pub fn team_id(&self) -> &TeamId {
        match self {
            PlaceEvent::Added { team_id, .. }
            | PlaceEvent::Visited { team_id, .. }
            | PlaceEvent::Skipped { team_id, .. }
            | PlaceEvent::Renamed { team_id, .. } => team_id,
        }
    }

    /// Short name used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            PlaceEvent::Added { .. } => "added",
            PlaceEvent::Visited { .. } => "visited",
            PlaceEvent::Skipped { .. } => "skipped",
            PlaceEvent::Renamed { .. } => "renamed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> TeamId {
        TeamId::new("T1").unwrap()
    }

    #[test]
    fn added_event() {
        let place_id = Uuid::new_v4();
        let event = PlaceEvent::Added {
            place_id,
            team_id: team(),
            name: PlaceName::new("Deli").unwrap(),
        };

        assert_eq!(event.place_id(), place_id);
        assert_eq!(event.team_id(), &team());
        assert_eq!(event.kind(), "added");
    }

    #[test]
    fn skipped_event() {
        let place_id = Uuid::new_v4();
        let event = PlaceEvent::Skipped {
            place_id,
            team_id: team(),
            at: Utc::now(),
            skip_count: 3,
        };

        assert_eq!(event.place_id(), place_id);
        assert_eq!(event.kind(), "skipped");
    }

    #[test]
    fn renamed_event() {
        let event = PlaceEvent::Renamed {
            place_id: Uuid::new_v4(),
            team_id: team(),
            from: PlaceName::new("Deli").unwrap(),
            to: PlaceName::new("Deli Two").unwrap(),
        };

        assert_eq!(event.kind(), "renamed");
        assert_eq!(event.clone(), event);
    }
}
