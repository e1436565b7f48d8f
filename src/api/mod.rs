// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::application::PlaceService;
use handlers::places;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub places: Arc<PlaceService>,
}

impl AppState {
    pub fn new(places: PlaceService) -> Self {
        Self {
            places: Arc::new(places),
        }
    }
}

/// Builds the application router
///
/// Middleware layers (tracing, CORS) are added by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(places::health_check))
        // Place lifecycle
        .route(
            "/api/teams/:team_id/places",
            get(places::list_places).post(places::create_place),
        )
        .route(
            "/api/teams/:team_id/places/:id",
            get(places::get_place)
                .patch(places::update_place)
                .delete(places::delete_place),
        )
        // Proposal and its outcomes
        .route("/api/teams/:team_id/proposal", get(places::propose_place))
        .route("/api/teams/:team_id/places/:id/visit", post(places::visit_place))
        .route("/api/teams/:team_id/places/:id/skip", post(places::skip_place))
        .with_state(state)
}
