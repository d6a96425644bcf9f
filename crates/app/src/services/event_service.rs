//! Event service — recording care and querying a plant's history.

use plantcare_domain::care::LatestEvents;
use plantcare_domain::error::{NotFoundError, PlantCareError};
use plantcare_domain::event::{Event, EventKind};
use plantcare_domain::id::{EventId, PlantId};

use crate::ports::{EventStore, PlantRepository};

/// Application service for care events.
///
/// Holds the plant repository only to check that a plant exists before
/// anything is recorded against it.
pub struct EventService<ES, PR> {
    events: ES,
    plants: PR,
}

impl<ES, PR> EventService<ES, PR>
where
    ES: EventStore + Sync,
    PR: PlantRepository + Sync,
{
    /// Create a new service backed by the given stores.
    pub fn new(events: ES, plants: PR) -> Self {
        Self { events, plants }
    }

    /// Record care of `kind` given to a plant, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`PlantCareError::PlantNotFound`] if the plant does not exist
    /// (nothing is stored), or a storage error from either store.
    #[tracing::instrument(skip(self, note))]
    pub async fn create_event(
        &self,
        plant_id: PlantId,
        kind: EventKind,
        note: impl Into<String>,
    ) -> Result<Event, PlantCareError> {
        if self.plants.get_by_id(plant_id).await?.is_none() {
            return Err(PlantCareError::PlantNotFound(plant_id));
        }
        let event = Event::new(plant_id, kind, note);
        tracing::debug!(event_id = %event.id, "recording care event");
        self.events.create(event).await
    }

    /// Record a watering.
    ///
    /// # Errors
    ///
    /// See [`create_event`](Self::create_event).
    pub async fn create_watering_event(
        &self,
        plant_id: PlantId,
        note: impl Into<String>,
    ) -> Result<Event, PlantCareError> {
        self.create_event(plant_id, EventKind::Watering, note).await
    }

    /// Record a fertilizing.
    ///
    /// # Errors
    ///
    /// See [`create_event`](Self::create_event).
    pub async fn create_fertilize_event(
        &self,
        plant_id: PlantId,
        note: impl Into<String>,
    ) -> Result<Event, PlantCareError> {
        self.create_event(plant_id, EventKind::Fertilizing, note)
            .await
    }

    /// Every event of a plant, oldest first. Unknown plants have no events.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the event store.
    pub async fn get_events_by_plant_id(
        &self,
        plant_id: PlantId,
    ) -> Result<Vec<Event>, PlantCareError> {
        self.events.list_by_plant_id(plant_id).await
    }

    /// Look up an event by id.
    ///
    /// # Errors
    ///
    /// Returns [`PlantCareError::NotFound`] when no event with `id` exists,
    /// or a storage error from the event store.
    #[tracing::instrument(skip(self))]
    pub async fn get_event(&self, id: EventId) -> Result<Event, PlantCareError> {
        self.events
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Event", id).into())
    }

    /// Latest event of each tracked kind for a plant.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the event store.
    pub async fn latest_events_by_kind(
        &self,
        plant_id: PlantId,
    ) -> Result<LatestEvents, PlantCareError> {
        self.events.latest_by_kind(plant_id).await
    }
}
