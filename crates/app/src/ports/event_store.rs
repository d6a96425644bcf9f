//! Event store port — append-only persistence for care events.

use std::future::Future;
use std::sync::Arc;

use plantcare_domain::care::LatestEvents;
use plantcare_domain::error::PlantCareError;
use plantcare_domain::event::Event;
use plantcare_domain::id::{EventId, PlantId};

/// Repository for appending and querying [`Event`]s.
pub trait EventStore {
    /// Append a new event. Callers check that the plant exists.
    fn create(&self, event: Event) -> impl Future<Output = Result<Event, PlantCareError>> + Send;

    /// Get an event by its unique identifier.
    fn get_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, PlantCareError>> + Send;

    /// All events of a plant, oldest first (ties by ascending id).
    fn list_by_plant_id(
        &self,
        plant_id: PlantId,
    ) -> impl Future<Output = Result<Vec<Event>, PlantCareError>> + Send;

    /// The latest event of every tracked kind for a plant, in one lookup.
    ///
    /// Implementations must agree with [`LatestEvents::from_events`]:
    /// greatest timestamp wins, equal timestamps go to the greatest id.
    fn latest_by_kind(
        &self,
        plant_id: PlantId,
    ) -> impl Future<Output = Result<LatestEvents, PlantCareError>> + Send;
}

impl<T: EventStore + Send + Sync> EventStore for Arc<T> {
    fn create(&self, event: Event) -> impl Future<Output = Result<Event, PlantCareError>> + Send {
        (**self).create(event)
    }

    fn get_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, PlantCareError>> + Send {
        (**self).get_by_id(id)
    }

    fn list_by_plant_id(
        &self,
        plant_id: PlantId,
    ) -> impl Future<Output = Result<Vec<Event>, PlantCareError>> + Send {
        (**self).list_by_plant_id(plant_id)
    }

    fn latest_by_kind(
        &self,
        plant_id: PlantId,
    ) -> impl Future<Output = Result<LatestEvents, PlantCareError>> + Send {
        (**self).latest_by_kind(plant_id)
    }
}
