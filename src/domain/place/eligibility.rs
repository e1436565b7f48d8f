use chrono::{DateTime, Duration, Utc};

use super::place::Place;

/// How long a skipped place is kept out of proposals
pub const SKIP_COOLDOWN_HOURS: i64 = 6;

/// How long a visited place is kept out of proposals
pub const VISIT_COOLDOWN_HOURS: i64 = 72;

/// Returns true when `place` may be proposed at `now`
///
/// A place is eligible when it was last skipped strictly before
/// `now - 6h` and last visited strictly before `now - 72h`. A place that
/// was never skipped (or never visited) passes that check.
pub fn is_eligible(place: &Place, now: DateTime<Utc>) -> bool {
    let skip_cutoff = now - Duration::hours(SKIP_COOLDOWN_HOURS);
    let visit_cutoff = now - Duration::hours(VISIT_COOLDOWN_HOURS);

    before(place.last_skipped(), skip_cutoff) && before(place.last_visited(), visit_cutoff)
}

/// Filters a team's places down to those that may be proposed at `now`
pub fn eligible_places(places: Vec<Place>, now: DateTime<Utc>) -> Vec<Place> {
    places
        .into_iter()
        .filter(|place| is_eligible(place, now))
        .collect()
}

fn before(at: Option<DateTime<Utc>>, cutoff: DateTime<Utc>) -> bool {
    at.map_or(true, |at| at < cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::place::value_objects::{PlaceName, TeamId};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap()
    }

    fn place(
        name: &str,
        last_visited: Option<DateTime<Utc>>,
        last_skipped: Option<DateTime<Utc>>,
    ) -> Place {
        Place::from_persistence(
            Uuid::new_v4(),
            TeamId::new("T1").unwrap(),
            PlaceName::new(name).unwrap(),
            last_visited,
            last_skipped,
            0,
            0,
            0,
            now() - Duration::days(100),
        )
    }

    #[test]
    fn never_visited_or_skipped_is_eligible() {
        assert!(is_eligible(&place("Deli", None, None), now()));
    }

    #[test]
    fn skip_boundary_at_six_hours() {
        let six_hours_ago = now() - Duration::hours(6);
        let ms = Duration::milliseconds(1);

        assert!(!is_eligible(&place("Deli", None, Some(six_hours_ago + ms)), now()));
        assert!(!is_eligible(&place("Deli", None, Some(six_hours_ago)), now()));
        assert!(is_eligible(&place("Deli", None, Some(six_hours_ago - ms)), now()));
    }

    #[test]
    fn visit_boundary_at_seventy_two_hours() {
        let three_days_ago = now() - Duration::hours(72);
        let ms = Duration::milliseconds(1);

        assert!(!is_eligible(&place("Deli", Some(three_days_ago + ms), None), now()));
        assert!(!is_eligible(&place("Deli", Some(three_days_ago), None), now()));
        assert!(is_eligible(&place("Deli", Some(three_days_ago - ms), None), now()));
    }

    #[test]
    fn both_conditions_must_hold() {
        let old_visit = Some(now() - Duration::days(10));
        let old_skip = Some(now() - Duration::days(10));
        let recent_visit = Some(now() - Duration::hours(1));
        let recent_skip = Some(now() - Duration::hours(1));

        assert!(is_eligible(&place("Deli", old_visit, old_skip), now()));
        assert!(!is_eligible(&place("Deli", recent_visit, old_skip), now()));
        assert!(!is_eligible(&place("Deli", old_visit, recent_skip), now()));
        assert!(!is_eligible(&place("Deli", recent_visit, recent_skip), now()));
    }

    #[test]
    fn skip_inside_visit_window_still_blocks() {
        // Skipped 10 hours ago is outside the skip window on its own.
        let p = place("Deli", Some(now() - Duration::hours(48)), Some(now() - Duration::hours(10)));
        assert!(!is_eligible(&p, now()));
    }

    #[test]
    fn eligible_places_keeps_only_eligible() {
        let places = vec![
            place("Deli", None, None),
            place("Cafe", Some(now() - Duration::hours(1)), None),
            place("Diner", None, Some(now() - Duration::hours(1))),
            place("Bistro", Some(now() - Duration::days(4)), Some(now() - Duration::hours(7))),
        ];

        let names: Vec<String> = eligible_places(places, now())
            .iter()
            .map(|p| p.name().to_string())
            .collect();

        assert_eq!(names, vec!["Deli".to_string(), "Bistro".to_string()]);
    }

    #[test]
    fn eligible_places_of_empty_input_is_empty() {
        assert!(eligible_places(Vec::new(), now()).is_empty());
    }
}
