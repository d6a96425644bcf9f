//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod events;
#[allow(clippy::missing_errors_doc)]
pub mod plants;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;

use plantcare_app::ports::{EventStore, PlantRepository, UserRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<UR, PR, ES>() -> Router<AppState<UR, PR, ES>>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    Router::new()
        // Users
        .route(
            "/users",
            get(users::list::<UR, PR, ES>).post(users::create::<UR, PR, ES>),
        )
        .route("/users/{user_id}", get(users::get::<UR, PR, ES>))
        // Plants
        .route(
            "/users/{user_id}/plants",
            get(plants::list::<UR, PR, ES>).post(plants::create::<UR, PR, ES>),
        )
        .route(
            "/users/{user_id}/plants/{plant_id}",
            get(plants::get::<UR, PR, ES>).put(plants::update::<UR, PR, ES>),
        )
        // Events
        .route(
            "/users/{user_id}/plants/{plant_id}/events",
            get(events::list::<UR, PR, ES>).post(events::create::<UR, PR, ES>),
        )
        .route("/events/{event_id}", get(events::get::<UR, PR, ES>))
}
