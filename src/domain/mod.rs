// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod clock;
pub mod errors;
pub mod place;
pub mod repositories;
