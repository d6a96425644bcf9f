//! JSON REST handlers for users.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use plantcare_app::ports::{EventStore, PlantRepository, UserRepository};
use plantcare_domain::id::UserId;
use plantcare_domain::user::User;

use crate::error::{ApiError, parse_id};
use crate::state::AppState;

/// Request body for creating a user.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
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
    Ok(Json<User>),
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
    Created(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/users`
pub async fn list<UR, PR, ES>(
    State(state): State<AppState<UR, PR, ES>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /api/users/{user_id}`
pub async fn get<UR, PR, ES>(
    State(state): State<AppState<UR, PR, ES>>,
    Path(user_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&user_id)?;
    let user = state.user_service.get_user(user_id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /api/users`
pub async fn create<UR, PR, ES>(
    State(state): State<AppState<UR, PR, ES>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    let user = state.user_service.create_user(req.name).await?;
    Ok(CreateResponse::Created(Json(user)))
}
