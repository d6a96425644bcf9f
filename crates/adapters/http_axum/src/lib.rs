//! # plantcare-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** for users, their plants and care events
//!   (`/api/users`, `/api/users/{user_id}/plants`, `/api/events/{event_id}`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! Plants are always returned with their care state (last events and next
//! due dates) computed at read time.
//!
//! ## Dependency rule
//! Depends on `plantcare-app` (for port traits and services) and
//! `plantcare-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
