// Application layer
// Composes domain rules and repository ports into the operations the API exposes

pub mod place_service;

pub use place_service::PlaceService;
