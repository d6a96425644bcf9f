//! JSON REST handlers for a user's plants.
//!
//! Reads return the plant decorated with its care state. A plant addressed
//! under a user it does not belong to is reported as not found.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use plantcare_app::ports::{EventStore, PlantRepository, UserRepository};
use plantcare_domain::care::DecoratedPlant;
use plantcare_domain::id::{PlantId, UserId};
use plantcare_domain::plant::Plant;

use crate::error::{ApiError, parse_id};
use crate::state::AppState;

/// Request body for creating or renaming a plant.
#[derive(Deserialize)]
pub struct PlantRequest {
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<DecoratedPlant>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<DecoratedPlant>),
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
    Created(Json<Plant>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/users/{user_id}/plants`
pub async fn list<UR, PR, ES>(
    State(state): State<AppState<UR, PR, ES>>,
    Path(user_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&user_id)?;
    let plants = state.plant_service.list_plants_for_user(user_id).await?;
    Ok(ListResponse::Ok(Json(plants)))
}

/// `GET /api/users/{user_id}/plants/{plant_id}`
pub async fn get<UR, PR, ES>(
    State(state): State<AppState<UR, PR, ES>>,
    Path((user_id, plant_id)): Path<(String, String)>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&user_id)?;
    let plant_id: PlantId = parse_id(&plant_id)?;
    let plant = state
        .plant_service
        .get_plant_for_user(user_id, plant_id)
        .await?;
    Ok(GetResponse::Ok(Json(plant)))
}

/// `POST /api/users/{user_id}/plants`
pub async fn create<UR, PR, ES>(
    State(state): State<AppState<UR, PR, ES>>,
    Path(user_id): Path<String>,
    Json(req): Json<PlantRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&user_id)?;
    let owner = state.user_service.get_user(user_id).await?;
    let plant = state.plant_service.create_plant(req.name, owner.id).await?;
    Ok(CreateResponse::Created(Json(plant)))
}

/// `PUT /api/users/{user_id}/plants/{plant_id}`
pub async fn update<UR, PR, ES>(
    State(state): State<AppState<UR, PR, ES>>,
    Path((user_id, plant_id)): Path<(String, String)>,
    Json(req): Json<PlantRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&user_id)?;
    let plant_id: PlantId = parse_id(&plant_id)?;
    let plant = state.plant_service.owned_plant(user_id, plant_id).await?;
    let updated = state.plant_service.update_plant(plant.id, req.name).await?;
    Ok(GetResponse::Ok(Json(updated)))
}
