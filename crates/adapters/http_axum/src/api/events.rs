//! JSON REST handlers for care events.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use plantcare_app::ports::{EventStore, PlantRepository, UserRepository};
use plantcare_domain::event::{Event, EventKind};
use plantcare_domain::id::{EventId, PlantId, UserId};

use crate::error::{ApiError, parse_id};
use crate::state::AppState;

/// Request body for recording care.
#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub kind: EventKind,
    #[serde(default)]
    pub note: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Event>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Event>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Event>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/users/{user_id}/plants/{plant_id}/events`
pub async fn list<UR, PR, ES>(
    State(state): State<AppState<UR, PR, ES>>,
    Path((user_id, plant_id)): Path<(String, String)>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&user_id)?;
    let plant_id: PlantId = parse_id(&plant_id)?;
    let plant = state.plant_service.owned_plant(user_id, plant_id).await?;
    let events = state.event_service.get_events_by_plant_id(plant.id).await?;
    Ok(ListResponse::Ok(Json(events)))
}

/// `POST /api/users/{user_id}/plants/{plant_id}/events`
pub async fn create<UR, PR, ES>(
    State(state): State<AppState<UR, PR, ES>>,
    Path((user_id, plant_id)): Path<(String, String)>,
    Json(req): Json<CreateEventRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&user_id)?;
    let plant_id: PlantId = parse_id(&plant_id)?;
    let plant = state.plant_service.owned_plant(user_id, plant_id).await?;
    let event = state
        .event_service
        .create_event(plant.id, req.kind, req.note)
        .await?;
    Ok(CreateResponse::Created(Json(event)))
}

/// `GET /api/events/{event_id}`
pub async fn get<UR, PR, ES>(
    State(state): State<AppState<UR, PR, ES>>,
    Path(event_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    let event_id: EventId = parse_id(&event_id)?;
    let event = state.event_service.get_event(event_id).await?;
    Ok(GetResponse::Ok(Json(event)))
}
