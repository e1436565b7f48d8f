// Place domain module
// Contains the place aggregate root, value objects, domain events, and
// the eligibility and selection rules used when proposing a place

#![allow(clippy::module_inception)]

pub mod eligibility;
pub mod events;
pub mod place;
pub mod selector;
pub mod value_objects;

// Re-export main types for convenience
pub use eligibility::{eligible_places, is_eligible};
pub use events::PlaceEvent;
pub use place::Place;
pub use selector::{RandomSelector, Selector};
pub use value_objects::{PlaceName, PlaceUpdate, TeamId};
