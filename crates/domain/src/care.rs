//! Care scheduling — derives "last done" and "next due" from a plant's
//! latest events.
//!
//! Everything here is pure: no IO, no clock reads, no shared state. A due
//! date is anchored to the event it was derived from, so asking again later
//! without new events yields the same answer.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::event::{Event, EventKind};
use crate::plant::Plant;
use crate::time::Timestamp;

/// Days between waterings unless configured otherwise.
pub const DEFAULT_WATERING_INTERVAL_DAYS: u32 = 7;
/// Days between fertilizings unless configured otherwise.
pub const DEFAULT_FERTILIZING_INTERVAL_DAYS: u32 = 30;

/// The latest event of each tracked kind for one plant.
///
/// A slot only ever holds an event of its own kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestEvents {
    watering: Option<Event>,
    fertilizing: Option<Event>,
}

impl LatestEvents {
    /// Select the latest event per kind out of an arbitrary set of events.
    ///
    /// "Latest" is the greatest timestamp; equal timestamps go to the
    /// greatest id.
    #[must_use]
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut latest = Self::default();
        for event in events {
            latest.offer(event);
        }
        latest
    }

    /// Keep `event` if it is more recent than the one held for its kind.
    pub fn offer(&mut self, event: Event) {
        let slot = self.slot_mut(event.kind);
        let newer = slot
            .as_ref()
            .is_none_or(|current| event.recency_key() > current.recency_key());
        if newer {
            *slot = Some(event);
        }
    }

    /// The latest event of `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: EventKind) -> Option<&Event> {
        match kind {
            EventKind::Watering => self.watering.as_ref(),
            EventKind::Fertilizing => self.fertilizing.as_ref(),
        }
    }

    /// Move the latest event of `kind` out.
    pub fn take(&mut self, kind: EventKind) -> Option<Event> {
        self.slot_mut(kind).take()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watering.is_none() && self.fertilizing.is_none()
    }

    fn slot_mut(&mut self, kind: EventKind) -> &mut Option<Event> {
        match kind {
            EventKind::Watering => &mut self.watering,
            EventKind::Fertilizing => &mut self.fertilizing,
        }
    }
}

/// Derived reminder state of one plant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareState {
    pub last_water_event: Option<Event>,
    pub next_water_due: Option<Timestamp>,
    pub last_fertilizer_event: Option<Event>,
    pub next_fertilizer_due: Option<Timestamp>,
}

/// A plant together with its derived care state. Computed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedPlant {
    #[serde(flatten)]
    pub plant: Plant,
    #[serde(flatten)]
    pub care: CareState,
}

impl DecoratedPlant {
    /// A plant with no care data attached.
    #[must_use]
    pub fn undecorated(plant: Plant) -> Self {
        Self {
            plant,
            care: CareState::default(),
        }
    }
}

/// Per-kind recurrence intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareSchedule {
    watering_interval: TimeDelta,
    fertilizing_interval: TimeDelta,
}

impl Default for CareSchedule {
    fn default() -> Self {
        Self::from_days(
            DEFAULT_WATERING_INTERVAL_DAYS,
            DEFAULT_FERTILIZING_INTERVAL_DAYS,
        )
    }
}

impl CareSchedule {
    /// Build a schedule from whole-day intervals.
    #[must_use]
    pub fn from_days(watering: u32, fertilizing: u32) -> Self {
        Self {
            watering_interval: TimeDelta::days(i64::from(watering)),
            fertilizing_interval: TimeDelta::days(i64::from(fertilizing)),
        }
    }

    /// Time between two occurrences of `kind`.
    #[must_use]
    pub fn interval(&self, kind: EventKind) -> TimeDelta {
        match kind {
            EventKind::Watering => self.watering_interval,
            EventKind::Fertilizing => self.fertilizing_interval,
        }
    }

    /// When care of the event's kind is due again.
    ///
    /// `None` only if the result falls outside the representable range.
    #[must_use]
    pub fn next_due(&self, event: &Event) -> Option<Timestamp> {
        event
            .timestamp
            .checked_add_signed(self.interval(event.kind))
    }

    /// Turn the latest events of a plant into its care state.
    ///
    /// Kinds without a latest event get neither a last event nor a due date.
    #[must_use]
    pub fn derive_care_state(&self, mut latest: LatestEvents) -> CareState {
        let water = latest.take(EventKind::Watering);
        let fertilizer = latest.take(EventKind::Fertilizing);
        CareState {
            next_water_due: water.as_ref().and_then(|e| self.next_due(e)),
            last_water_event: water,
            next_fertilizer_due: fertilizer.as_ref().and_then(|e| self.next_due(e)),
            last_fertilizer_event: fertilizer,
        }
    }

    /// Merge a plant with the care state derived from `latest`.
    #[must_use]
    pub fn decorate(&self, plant: Plant, latest: LatestEvents) -> DecoratedPlant {
        DecoratedPlant {
            plant,
            care: self.derive_care_state(latest),
        }
    }
}
