//! `SQLite` implementation of [`EventStore`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use plantcare_app::ports::EventStore;
use plantcare_domain::care::LatestEvents;
use plantcare_domain::error::PlantCareError;
use plantcare_domain::event::{Event, EventKind};
use plantcare_domain::id::{EventId, PlantId};
use plantcare_domain::time::to_sortable_string;

use crate::error::StorageError;

struct Wrapper(Event);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Event> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let plant_id: String = row.try_get("plant_id")?;
        let kind: String = row.try_get("kind")?;
        let note: String = row.try_get("note")?;
        let timestamp: String = row.try_get("timestamp")?;

        let id = EventId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let plant_id =
            PlantId::from_str(&plant_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let kind = EventKind::from_str(&kind).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let timestamp = chrono::DateTime::parse_from_rfc3339(&timestamp)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Event {
            id,
            plant_id,
            kind,
            note,
            timestamp,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO events (id, plant_id, kind, note, timestamp)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT id, plant_id, kind, note, timestamp FROM events WHERE id = ?";
const SELECT_BY_PLANT: &str = r"
    SELECT id, plant_id, kind, note, timestamp FROM events
    WHERE plant_id = ?
    ORDER BY timestamp ASC, id ASC
";

// One row per kind: the newest timestamp, ties going to the highest id.
const SELECT_LATEST_BY_KIND: &str = r"
    SELECT id, plant_id, kind, note, timestamp FROM (
        SELECT id, plant_id, kind, note, timestamp,
               ROW_NUMBER() OVER (
                   PARTITION BY kind ORDER BY timestamp DESC, id DESC
               ) AS position
        FROM events
        WHERE plant_id = ?
    )
    WHERE position = 1
";

/// `SQLite`-backed event store.
pub struct SqliteEventStore {
    pool: SqlitePool,
}

impl SqliteEventStore {
    /// Create a new event store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EventStore for SqliteEventStore {
    fn create(&self, event: Event) -> impl Future<Output = Result<Event, PlantCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(event.id.to_string())
                .bind(event.plant_id.to_string())
                .bind(event.kind.as_str())
                .bind(&event.note)
                .bind(to_sortable_string(event.timestamp))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(event)
        }
    }

    fn get_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, PlantCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn list_by_plant_id(
        &self,
        plant_id: PlantId,
    ) -> impl Future<Output = Result<Vec<Event>, PlantCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PLANT)
                .bind(plant_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn latest_by_kind(
        &self,
        plant_id: PlantId,
    ) -> impl Future<Output = Result<LatestEvents, PlantCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_LATEST_BY_KIND)
                .bind(plant_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(LatestEvents::from_events(rows.into_iter().map(|w| w.0)))
        }
    }
}
