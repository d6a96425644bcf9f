//! # plantcare-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository` — create and read users
//!   - `PlantRepository` — create, read, and rename plants
//!   - `EventStore` — append & query care events, including the
//!     latest-event-per-kind lookup
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService` — create, list, get
//!   - `PlantService` — list/get plants decorated with care state, create, rename
//!   - `EventService` — record care, query history
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `plantcare-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
