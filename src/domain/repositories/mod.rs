// Repository ports
// Storage adapters in `infrastructure` implement these traits

pub mod place_repository;

pub use place_repository::{PlaceRepository, RepositoryError};
