//! Event — an immutable record of care given to a plant.
//!
//! Events are append-only: once stored they are never updated or deleted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::{EventId, PlantId};
use crate::time::Timestamp;

/// The kind of care an [`Event`] records.
///
/// On the wire and in storage a kind is always its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Watering,
    Fertilizing,
}

impl EventKind {
    /// Every kind the care scheduler tracks.
    pub const ALL: [Self; 2] = [Self::Watering, Self::Fertilizing];

    /// The stable string tag of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Watering => "watering",
            Self::Fertilizing => "fertilizing",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known [`EventKind`] tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event kind {0:?}")]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

/// A timestamped occurrence of care tied to a plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub plant_id: PlantId,
    pub kind: EventKind,
    pub note: String,
    pub timestamp: Timestamp,
}

impl Event {
    /// Record a new event happening now.
    #[must_use]
    pub fn new(plant_id: PlantId, kind: EventKind, note: impl Into<String>) -> Self {
        Self::builder()
            .plant_id(plant_id)
            .kind(kind)
            .note(note)
            .build()
    }

    /// Create a builder for constructing an [`Event`].
    #[must_use]
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    /// Ordering key for "latest": timestamp first, then id.
    #[must_use]
    pub fn recency_key(&self) -> (Timestamp, EventId) {
        (self.timestamp, self.id)
    }
}

/// Step-by-step builder for [`Event`].
#[derive(Debug, Default)]
pub struct EventBuilder {
    id: Option<EventId>,
    plant_id: Option<PlantId>,
    kind: Option<EventKind>,
    note: String,
    timestamp: Option<Timestamp>,
}

impl EventBuilder {
    #[must_use]
    pub fn id(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn plant_id(mut self, plant_id: PlantId) -> Self {
        self.plant_id = Some(plant_id);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: EventKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Consume the builder and return an [`Event`].
    ///
    /// Defaults to a watering event stamped with the current time.
    #[must_use]
    pub fn build(self) -> Event {
        Event {
            id: self.id.unwrap_or_default(),
            plant_id: self.plant_id.unwrap_or_default(),
            kind: self.kind.unwrap_or(EventKind::Watering),
            note: self.note,
            timestamp: self.timestamp.unwrap_or_else(crate::time::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_kind_as_lowercase_tag() {
        let json = serde_json::to_string(&EventKind::Fertilizing).unwrap();
        assert_eq!(json, "\"fertilizing\"");
        let parsed: EventKind = serde_json::from_str("\"watering\"").unwrap();
        assert_eq!(parsed, EventKind::Watering);
    }

    #[test]
    fn should_reject_integer_kind_tags() {
        assert!(serde_json::from_str::<EventKind>("1").is_err());
    }

    #[test]
    fn should_parse_kind_from_its_tag() {
        for kind in EventKind::ALL {
            assert_eq!(kind.as_str().parse::<EventKind>(), Ok(kind));
        }
        assert_eq!(
            "pruning".parse::<EventKind>(),
            Err(UnknownEventKind("pruning".to_string()))
        );
    }

    #[test]
    fn should_stamp_new_event_with_current_time() {
        let before = crate::time::now();
        let event = Event::new(PlantId::new(), EventKind::Watering, "first drink");
        assert!(event.timestamp >= before);
        assert_eq!(event.note, "first drink");
    }

    #[test]
    fn should_break_recency_ties_by_id() {
        let ts = crate::time::now();
        let a = Event::builder().timestamp(ts).build();
        let b = Event::builder().timestamp(ts).build();
        assert_eq!(a.recency_key() < b.recency_key(), a.id < b.id);
    }
}
