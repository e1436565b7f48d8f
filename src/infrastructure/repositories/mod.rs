// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_place_repository;
pub mod postgres_place_repository;

pub use in_memory_place_repository::InMemoryPlaceRepository;
pub use postgres_place_repository::PostgresPlaceRepository;
