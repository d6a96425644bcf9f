//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PlantCareError`] via `From`; adapter failures end up boxed in
//! [`PlantCareError::Storage`].

use crate::id::PlantId;

/// Top-level error returned by ports and services.
#[derive(Debug, thiserror::Error)]
pub enum PlantCareError {
    /// Input rejected before reaching any store.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// An event was created for a plant that does not exist.
    #[error("plant {0} not found")]
    PlantNotFound(PlantId),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons an input can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A lookup by id matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn new(entity: &'static str, id: impl ToString) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}

/// Reject names that are empty once surrounding whitespace is removed.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] for a blank name.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}
