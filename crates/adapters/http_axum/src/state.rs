//! Shared application state for axum handlers.

use std::sync::Arc;

use plantcare_app::ports::{EventStore, PlantRepository, UserRepository};
use plantcare_app::services::event_service::EventService;
use plantcare_app::services::plant_service::PlantService;
use plantcare_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the user repository, plant repository and event store to
/// avoid dynamic dispatch. `Clone` is implemented manually so the
/// underlying types themselves do not need to be `Clone`; only the `Arc`
/// wrappers are cloned.
pub struct AppState<UR, PR, ES> {
    /// User use-cases.
    pub user_service: Arc<UserService<UR>>,
    /// Plant use-cases, including care decoration.
    pub plant_service: Arc<PlantService<PR, ES>>,
    /// Event recording and history.
    pub event_service: Arc<EventService<ES, PR>>,
}

impl<UR, PR, ES> Clone for AppState<UR, PR, ES> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            plant_service: Arc::clone(&self.plant_service),
            event_service: Arc::clone(&self.event_service),
        }
    }
}

impl<UR, PR, ES> AppState<UR, PR, ES>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlantRepository + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        plant_service: PlantService<PR, ES>,
        event_service: EventService<ES, PR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            plant_service: Arc::new(plant_service),
            event_service: Arc::new(event_service),
        }
    }
}
