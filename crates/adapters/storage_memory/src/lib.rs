//! # plantcare-adapter-storage-memory
//!
//! Volatile persistence adapter: every record lives in lock-guarded
//! collections owned by an [`InMemoryStore`].
//!
//! ## Responsibilities
//! - Implement `UserRepository`, `PlantRepository` and `EventStore` from
//!   `plantcare-app::ports`
//! - Guard shared state with `tokio::sync::RwLock` so concurrent requests
//!   never observe a half-applied write
//!
//! A store is built once at startup and cloned into every service that
//! needs it; clones share the same collections. Nothing survives a restart.
//!
//! ## Dependency rule
//! Depends on `plantcare-app` (for port traits) and `plantcare-domain` (for domain types).

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use plantcare_app::ports::{EventStore, PlantRepository, UserRepository};
use plantcare_domain::care::LatestEvents;
use plantcare_domain::error::PlantCareError;
use plantcare_domain::event::Event;
use plantcare_domain::id::{EventId, PlantId, UserId};
use plantcare_domain::plant::Plant;
use plantcare_domain::user::User;

#[derive(Default)]
struct State {
    users: RwLock<HashMap<UserId, User>>,
    plants: RwLock<HashMap<PlantId, Plant>>,
    events: RwLock<Vec<Event>>,
}

/// In-memory backend implementing every storage port.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<State>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events.
    pub async fn event_count(&self) -> usize {
        self.state.events.read().await.len()
    }
}

impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> Result<User, PlantCareError> {
        self.state
            .users
            .write()
            .await
            .insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, PlantCareError> {
        Ok(self.state.users.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>, PlantCareError> {
        let mut users: Vec<User> = self.state.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(users)
    }
}

impl PlantRepository for InMemoryStore {
    async fn create(&self, plant: Plant) -> Result<Plant, PlantCareError> {
        self.state
            .plants
            .write()
            .await
            .insert(plant.id, plant.clone());
        Ok(plant)
    }

    async fn get_by_id(&self, id: PlantId) -> Result<Option<Plant>, PlantCareError> {
        Ok(self.state.plants.read().await.get(&id).cloned())
    }

    async fn get_by_user_id(&self, user_id: UserId) -> Result<Vec<Plant>, PlantCareError> {
        let mut plants: Vec<Plant> = self
            .state
            .plants
            .read()
            .await
            .values()
            .filter(|plant| plant.user_id == user_id)
            .cloned()
            .collect();
        plants.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(plants)
    }

    async fn update_name(&self, id: PlantId, name: String) -> Result<Option<Plant>, PlantCareError> {
        let mut plants = self.state.plants.write().await;
        Ok(plants.get_mut(&id).map(|plant| {
            plant.name = name;
            plant.clone()
        }))
    }
}

impl EventStore for InMemoryStore {
    async fn create(&self, event: Event) -> Result<Event, PlantCareError> {
        self.state.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn get_by_id(&self, id: EventId) -> Result<Option<Event>, PlantCareError> {
        let events = self.state.events.read().await;
        Ok(events.iter().find(|event| event.id == id).cloned())
    }

    async fn list_by_plant_id(&self, plant_id: PlantId) -> Result<Vec<Event>, PlantCareError> {
        let mut events: Vec<Event> = self
            .state
            .events
            .read()
            .await
            .iter()
            .filter(|event| event.plant_id == plant_id)
            .cloned()
            .collect();
        events.sort_by_key(Event::recency_key);
        Ok(events)
    }

    async fn latest_by_kind(&self, plant_id: PlantId) -> Result<LatestEvents, PlantCareError> {
        let events = self.state.events.read().await;
        Ok(LatestEvents::from_events(
            events
                .iter()
                .filter(|event| event.plant_id == plant_id)
                .cloned(),
        ))
    }
}
