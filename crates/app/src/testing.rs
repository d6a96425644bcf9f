//! In-memory port fakes shared by the service tests.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Mutex;

use plantcare_domain::care::LatestEvents;
use plantcare_domain::error::PlantCareError;
use plantcare_domain::event::Event;
use plantcare_domain::id::{EventId, PlantId, UserId};
use plantcare_domain::plant::Plant;
use plantcare_domain::user::User;

use crate::ports::{EventStore, PlantRepository, UserRepository};

#[derive(Default)]
pub struct InMemoryUsers {
    store: Mutex<HashMap<UserId, User>>,
}

impl UserRepository for InMemoryUsers {
    fn create(&self, user: User) -> impl Future<Output = Result<User, PlantCareError>> + Send {
        self.store.lock().unwrap().insert(user.id, user.clone());
        async { Ok(user) }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, PlantCareError>> + Send {
        let result = self.store.lock().unwrap().get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, PlantCareError>> + Send {
        let result: Vec<User> = self.store.lock().unwrap().values().cloned().collect();
        async { Ok(result) }
    }
}

#[derive(Default)]
pub struct InMemoryPlants {
    store: Mutex<HashMap<PlantId, Plant>>,
}

impl InMemoryPlants {
    pub fn with(plants: Vec<Plant>) -> Self {
        let repo = Self::default();
        repo.store
            .lock()
            .unwrap()
            .extend(plants.into_iter().map(|p| (p.id, p)));
        repo
    }
}

impl PlantRepository for InMemoryPlants {
    fn create(&self, plant: Plant) -> impl Future<Output = Result<Plant, PlantCareError>> + Send {
        self.store.lock().unwrap().insert(plant.id, plant.clone());
        async { Ok(plant) }
    }

    fn get_by_id(
        &self,
        id: PlantId,
    ) -> impl Future<Output = Result<Option<Plant>, PlantCareError>> + Send {
        let result = self.store.lock().unwrap().get(&id).cloned();
        async { Ok(result) }
    }

    fn get_by_user_id(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Plant>, PlantCareError>> + Send {
        let mut result: Vec<Plant> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        async { Ok(result) }
    }

    fn update_name(
        &self,
        id: PlantId,
        name: String,
    ) -> impl Future<Output = Result<Option<Plant>, PlantCareError>> + Send {
        let result = self.store.lock().unwrap().get_mut(&id).map(|plant| {
            plant.name = name;
            plant.clone()
        });
        async { Ok(result) }
    }
}

/// Event fake that can be told to fail the latest-event lookup per plant.
#[derive(Default)]
pub struct InMemoryEvents {
    store: Mutex<Vec<Event>>,
    failing: Mutex<HashSet<PlantId>>,
}

impl InMemoryEvents {
    pub fn push(&self, event: Event) {
        self.store.lock().unwrap().push(event);
    }

    pub fn count(&self) -> usize {
        self.store.lock().unwrap().len()
    }

    pub fn fail_lookups_for(&self, plant_id: PlantId) {
        self.failing.lock().unwrap().insert(plant_id);
    }

    fn of_plant(&self, plant_id: PlantId) -> Vec<Event> {
        self.store
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.plant_id == plant_id)
            .cloned()
            .collect()
    }
}

impl EventStore for InMemoryEvents {
    fn create(&self, event: Event) -> impl Future<Output = Result<Event, PlantCareError>> + Send {
        self.push(event.clone());
        async { Ok(event) }
    }

    fn get_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, PlantCareError>> + Send {
        let result = self
            .store
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned();
        async { Ok(result) }
    }

    fn list_by_plant_id(
        &self,
        plant_id: PlantId,
    ) -> impl Future<Output = Result<Vec<Event>, PlantCareError>> + Send {
        let mut result = self.of_plant(plant_id);
        result.sort_by_key(Event::recency_key);
        async { Ok(result) }
    }

    fn latest_by_kind(
        &self,
        plant_id: PlantId,
    ) -> impl Future<Output = Result<LatestEvents, PlantCareError>> + Send {
        let result = if self.failing.lock().unwrap().contains(&plant_id) {
            Err(PlantCareError::Storage(Box::new(std::io::Error::other(
                "event lookup failed",
            ))))
        } else {
            Ok(LatestEvents::from_events(self.of_plant(plant_id)))
        };
        async { result }
    }
}
