//! Plant service — plant use-cases with care state attached.
//!
//! Every plant leaving this service for a read passes through the care
//! scheduler. A failed event lookup never fails the read: the plant is
//! returned without care data and a warning is logged. Listing and single
//! lookups share this policy.

use plantcare_domain::care::{CareSchedule, DecoratedPlant};
use plantcare_domain::error::{NotFoundError, PlantCareError, validate_name};
use plantcare_domain::id::{PlantId, UserId};
use plantcare_domain::plant::Plant;

use crate::ports::{EventStore, PlantRepository};

/// Application service for plants.
pub struct PlantService<PR, ES> {
    plants: PR,
    events: ES,
    schedule: CareSchedule,
}

impl<PR, ES> PlantService<PR, ES>
where
    PR: PlantRepository + Sync,
    ES: EventStore + Sync,
{
    /// Create a new service using the default care intervals.
    pub fn new(plants: PR, events: ES) -> Self {
        Self::with_schedule(plants, events, CareSchedule::default())
    }

    /// Create a new service using custom care intervals.
    pub fn with_schedule(plants: PR, events: ES, schedule: CareSchedule) -> Self {
        Self {
            plants,
            events,
            schedule,
        }
    }

    /// The intervals this service schedules with.
    pub fn schedule(&self) -> CareSchedule {
        self.schedule
    }

    /// All plants of a user with their care state.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the plants themselves cannot be read.
    #[tracing::instrument(skip(self))]
    pub async fn list_plants_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<DecoratedPlant>, PlantCareError> {
        let plants = self.plants.get_by_user_id(user_id).await?;
        let mut decorated = Vec::with_capacity(plants.len());
        for plant in plants {
            decorated.push(self.decorate(plant).await);
        }
        Ok(decorated)
    }

    /// A single plant with its care state.
    ///
    /// # Errors
    ///
    /// Returns [`PlantCareError::NotFound`] when no plant with `id` exists,
    /// or a storage error from the plant repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_plant(&self, id: PlantId) -> Result<DecoratedPlant, PlantCareError> {
        let plant = self
            .plants
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Plant", id))?;
        Ok(self.decorate(plant).await)
    }

    /// The plant `id`, provided it belongs to `user_id`. No care state.
    ///
    /// # Errors
    ///
    /// Returns [`PlantCareError::NotFound`] when the plant does not exist or
    /// is owned by another user, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn owned_plant(&self, user_id: UserId, id: PlantId) -> Result<Plant, PlantCareError> {
        self.plants
            .get_by_id(id)
            .await?
            .filter(|plant| plant.user_id == user_id)
            .ok_or_else(|| NotFoundError::new("Plant", id).into())
    }

    /// Like [`get_plant`](Self::get_plant), scoped to one owner.
    ///
    /// # Errors
    ///
    /// See [`owned_plant`](Self::owned_plant).
    pub async fn get_plant_for_user(
        &self,
        user_id: UserId,
        id: PlantId,
    ) -> Result<DecoratedPlant, PlantCareError> {
        let plant = self.owned_plant(user_id, id).await?;
        Ok(self.decorate(plant).await)
    }

    /// Create a plant for a user. New plants have no events to decorate.
    ///
    /// # Errors
    ///
    /// Returns [`PlantCareError::Validation`] if `name` is blank, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, name))]
    pub async fn create_plant(
        &self,
        name: impl Into<String>,
        user_id: UserId,
    ) -> Result<Plant, PlantCareError> {
        let plant = Plant::builder().name(name).user_id(user_id).build()?;
        self.plants.create(plant).await
    }

    /// Rename a plant and return its fresh view.
    ///
    /// # Errors
    ///
    /// Returns [`PlantCareError::Validation`] if `name` is blank,
    /// [`PlantCareError::NotFound`] when the plant does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, name))]
    pub async fn update_plant(
        &self,
        id: PlantId,
        name: impl Into<String>,
    ) -> Result<DecoratedPlant, PlantCareError> {
        let name = name.into();
        validate_name(&name)?;
        self.plants
            .update_name(id, name)
            .await?
            .ok_or_else(|| NotFoundError::new("Plant", id))?;
        self.get_plant(id).await
    }

    async fn decorate(&self, plant: Plant) -> DecoratedPlant {
        match self.events.latest_by_kind(plant.id).await {
            Ok(latest) => self.schedule.decorate(plant, latest),
            Err(err) => {
                tracing::warn!(
                    plant_id = %plant.id,
                    error = %err,
                    "event lookup failed, returning plant without care state"
                );
                DecoratedPlant::undecorated(plant)
            }
        }
    }
}
