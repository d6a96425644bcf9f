//! # plantcare-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the storage port traits defined in `plantcare-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! Identifiers are stored as lowercase hyphenated text and timestamps as
//! fixed-width RFC 3339 text, so `ORDER BY` on either column matches the
//! ordering of the domain values.
//!
//! ## Dependency rule
//! Depends on `plantcare-app` (for port traits) and `plantcare-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod event_store;
mod plant_repo;
mod pool;
mod user_repo;

pub use error::StorageError;
pub use event_store::SqliteEventStore;
pub use plant_repo::SqlitePlantRepository;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
