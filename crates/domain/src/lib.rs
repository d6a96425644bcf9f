//! # plantcare-domain
//!
//! Pure domain model for the plantcare record keeper.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Users** (plant owners)
//! - Define **Plants** (tracked entities owned by a user)
//! - Define **Events** (immutable care records: watering, fertilizing)
//! - Derive **care state** (last event and next due date per kind)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod care;
pub mod event;
pub mod plant;
pub mod user;
