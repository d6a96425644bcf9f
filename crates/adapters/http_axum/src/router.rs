//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use plantcare_app::ports::{EventStore, PlantRepository, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` next to a plain `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a permissive
/// [`CorsLayer`] so browser clients on any origin can call the API.
pub fn build<UR, PR, ES>(state: AppState<UR, PR, ES>) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
