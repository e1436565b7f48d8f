use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::errors::PlaceError;
use crate::domain::place::{Place, PlaceName, PlaceUpdate, TeamId};

/// Request body for adding a place
#[derive(Debug, Deserialize)]
pub struct CreatePlaceRequest {
    pub name: String,
}

/// Request body for a partial place update
///
/// Only the listed fields can be changed; anything else is rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePlaceRequest {
    pub name: Option<String>,
}

/// Place representation returned by every endpoint
#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    pub id: Uuid,
    pub team_id: String,
    pub name: String,
    pub last_visited: Option<DateTime<Utc>>,
    pub last_skipped: Option<DateTime<Utc>>,
    pub visit_count: i64,
    pub skip_count: i64,
    pub version: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Place> for PlaceResponse {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id(),
            team_id: place.team_id().to_string(),
            name: place.name().to_string(),
            last_visited: place.last_visited(),
            last_skipped: place.last_skipped(),
            visit_count: place.visit_count(),
            skip_count: place.skip_count(),
            version: place.version(),
            created_at: place.created_at(),
        }
    }
}

fn team_id(raw: &str) -> Result<TeamId, ApiError> {
    TeamId::new(raw).map_err(ApiError::bad_request)
}

/// Place ids are opaque to callers; one that is not a UUID cannot exist.
fn place_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| PlaceError::NotFound.into())
}

fn place_name(raw: String) -> Result<PlaceName, ApiError> {
    PlaceName::new(raw).map_err(|e| PlaceError::Validation(e).into())
}

/// List a team's places
///
/// GET /api/teams/:team_id/places
pub async fn list_places(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<Vec<PlaceResponse>>, ApiError> {
    let team = team_id(&team)?;
    let places = state.places.all_places(&team).await?;

    Ok(Json(places.iter().map(PlaceResponse::from).collect()))
}

/// Add a place
///
/// POST /api/teams/:team_id/places
pub async fn create_place(
    State(state): State<AppState>,
    Path(team): Path<String>,
    payload: Result<Json<CreatePlaceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlaceResponse>), ApiError> {
    let team = team_id(&team)?;
    let Json(req) = payload?;
    let name = place_name(req.name)?;

    let place = state.places.add_place(team, name).await?;

    Ok((StatusCode::CREATED, Json(PlaceResponse::from(&place))))
}

/// Get a place by ID
///
/// GET /api/teams/:team_id/places/:id
pub async fn get_place(
    State(state): State<AppState>,
    Path((team, id)): Path<(String, String)>,
) -> Result<Json<PlaceResponse>, ApiError> {
    let team = team_id(&team)?;
    let id = place_id(&id)?;

    let place = state.places.find_by_id(&team, id).await?;

    Ok(Json(PlaceResponse::from(&place)))
}

/// Update a place
///
/// PATCH /api/teams/:team_id/places/:id
pub async fn update_place(
    State(state): State<AppState>,
    Path((team, id)): Path<(String, String)>,
    payload: Result<Json<UpdatePlaceRequest>, JsonRejection>,
) -> Result<Json<PlaceResponse>, ApiError> {
    let team = team_id(&team)?;
    let id = place_id(&id)?;
    let Json(req) = payload?;
    let update = PlaceUpdate {
        name: req.name.map(place_name).transpose()?,
    };

    let place = state.places.update_place(&team, id, update).await?;

    Ok(Json(PlaceResponse::from(&place)))
}

/// Delete a place
///
/// DELETE /api/teams/:team_id/places/:id
pub async fn delete_place(
    State(state): State<AppState>,
    Path((team, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let team = team_id(&team)?;
    let id = place_id(&id)?;

    state.places.delete_place(&team, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Propose a place for today's lunch
///
/// GET /api/teams/:team_id/proposal
pub async fn propose_place(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<PlaceResponse>, ApiError> {
    let team = team_id(&team)?;
    let place = state.places.propose_place(&team).await?;

    Ok(Json(PlaceResponse::from(&place)))
}

/// Accept a place
///
/// POST /api/teams/:team_id/places/:id/visit
pub async fn visit_place(
    State(state): State<AppState>,
    Path((team, id)): Path<(String, String)>,
) -> Result<Json<PlaceResponse>, ApiError> {
    let team = team_id(&team)?;
    let id = place_id(&id)?;

    let place = state.places.visit_place(&team, id).await?;

    Ok(Json(PlaceResponse::from(&place)))
}

/// Decline a place
///
/// POST /api/teams/:team_id/places/:id/skip
pub async fn skip_place(
    State(state): State<AppState>,
    Path((team, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let team = team_id(&team)?;
    let id = place_id(&id)?;

    state.places.skip_place(&team, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
